use crate::client::ReplyClient;
use crate::config::Config;
use crate::persona::Mode;

/// Shown as the assistant turn when the reply request fails for any reason.
pub const FALLBACK_REPLY: &str = "Oops! Something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the conversation. Never edited after being appended.
#[derive(Debug, Clone)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// A submitted draft, ready to be dispatched to the reply service.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub message: String,
    pub mode: Mode,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub mode: Mode,

    // Draft input
    pub draft: String,
    pub cursor: usize, // char index into draft

    // Conversation (append-only, insertion order = display order)
    pub turns: Vec<Turn>,

    // In-flight request
    pub sending: bool,
    pub pending_reply: Option<tokio::task::JoinHandle<anyhow::Result<String>>>,

    // Chat pane scroll state (dimensions updated during render)
    pub chat_scroll: u16,
    pub chat_height: u16,
    pub chat_width: u16,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    pub client: ReplyClient,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mode = config
            .default_mode
            .as_deref()
            .and_then(Mode::from_str)
            .unwrap_or_default();

        Self {
            should_quit: false,
            mode,

            draft: String::new(),
            cursor: 0,

            turns: Vec::new(),

            sending: false,
            pending_reply: None,

            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,

            animation_frame: 0,

            client: ReplyClient::new(config.backend_url()),
        }
    }

    /// Flip between fun and serious. Leaves the conversation and any
    /// in-flight request alone.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Commit the current draft as a user turn.
    ///
    /// No-op when the draft is blank or a request is already outstanding.
    /// Otherwise the user turn is appended, the draft cleared, and the
    /// busy flag raised before the payload is handed back for dispatch.
    pub fn submit(&mut self) -> Option<OutboundMessage> {
        if self.draft.trim().is_empty() || self.sending {
            return None;
        }

        let message = std::mem::take(&mut self.draft);
        self.cursor = 0;

        self.turns.push(Turn {
            speaker: Speaker::User,
            text: message.clone(),
        });
        self.sending = true;
        self.scroll_chat_to_bottom();

        Some(OutboundMessage {
            message,
            mode: self.mode,
        })
    }

    /// Record the outcome of a dispatched request, in either direction.
    /// Failures of any kind become the fixed fallback turn.
    pub fn finish_reply(&mut self, result: anyhow::Result<String>) {
        let text = result.unwrap_or_else(|_| FALLBACK_REPLY.to_string());
        self.turns.push(Turn {
            speaker: Speaker::Assistant,
            text,
        });
        self.sending = false;
        self.scroll_chat_to_bottom();
    }

    // Chat scrolling
    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.sending {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Scroll the chat pane so the newest turn (or the thinking indicator)
    /// is visible.
    pub fn scroll_chat_to_bottom(&mut self) {
        // Use actual chat width for wrap calculation, default to 50 if not set
        let wrap_width = if self.chat_width > 0 {
            self.chat_width as usize
        } else {
            50
        };

        let mut total_lines: u16 = 0;

        for turn in &self.turns {
            total_lines += 1; // Speaker line ("You:" or "Einstein:")
            for line in turn.text.lines() {
                // Use character count, not byte length, for proper UTF-8 handling
                let char_count = line.chars().count();
                if char_count == 0 {
                    total_lines += 1; // Empty line still takes one line
                } else {
                    total_lines += ((char_count / wrap_width) + 1) as u16;
                }
            }
            total_lines += 1; // Blank line after turn
        }

        if self.sending {
            total_lines += 2; // "Einstein:" + thinking indicator
        }

        let visible_height = if self.chat_height > 0 {
            self.chat_height
        } else {
            20
        };

        if total_lines > visible_height {
            self.chat_scroll = total_lines.saturating_sub(visible_height);
        } else {
            self.chat_scroll = 0;
        }
    }

    // Draft editing (cursor is a char index, converted to bytes on mutation)
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.draft, self.cursor);
        self.draft.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte_index(&self.draft, self.cursor);
            self.draft.remove(byte_pos);
        }
    }

    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor < self.draft.chars().count() {
            let byte_pos = char_to_byte_index(&self.draft, self.cursor);
            self.draft.remove(byte_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.draft.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.draft.chars().count();
    }
}

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
