use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::persona::Mode;

/// A hung backend would otherwise leave the widget busy forever; bound
/// the request so it settles through the normal failure path.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ReplyRequest<'a> {
    message: &'a str,
    mode: &'static str,
}

#[derive(Deserialize)]
struct ReplyResponse {
    reply: String,
}

/// Client for the remote reply service.
#[derive(Clone)]
pub struct ReplyClient {
    client: Client,
    url: String,
}

impl ReplyClient {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }

    /// Send one user message and return the persona's reply text.
    ///
    /// Network errors, timeouts, non-2xx statuses, and malformed bodies
    /// are all the same failure to the caller.
    pub async fn reply(&self, message: &str, mode: Mode) -> Result<String> {
        let request = ReplyRequest {
            message,
            mode: mode.wire_name(),
        };

        let response = self
            .client
            .post(&self.url)
            .timeout(REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "reply request failed with status: {}",
                response.status()
            ));
        }

        let reply_response: ReplyResponse = response.json().await?;
        Ok(reply_response.reply)
    }
}
