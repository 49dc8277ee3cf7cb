/// Response mode for the Einstein persona. Affects the portrait and label
/// shown locally and, server-side, the tone of the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Fun,
    Serious,
}

/// Fixed display metadata for a mode.
pub struct ModeProfile {
    pub label: &'static str,
    pub portrait: &'static str,
}

const FUN_PROFILE: ModeProfile = ModeProfile {
    label: "Fun Einstein",
    portrait: r#"
      .-"""-.
     / .===. \
    / / a a \ \
    | |  ^  | |
    | | \_/ | |
     \ \===/ /
    ~~~~~~~~~~~
    E = mc^2 !
"#,
};

const SERIOUS_PROFILE: ModeProfile = ModeProfile {
    label: "Serious Science",
    portrait: r#"
      .-"""-.
     / .===. \
    / / - - \ \
    | |  .  | |
    | | ___ | |
     \ \===/ /
    ~~~~~~~~~~~
     E = mc^2
"#,
};

impl Mode {
    /// The value sent to the reply service in the request body.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Mode::Fun => "fun",
            Mode::Serious => "serious",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fun" => Some(Mode::Fun),
            "serious" => Some(Mode::Serious),
            _ => None,
        }
    }

    /// The other mode. Toggling is the only way modes change.
    pub fn toggled(&self) -> Self {
        match self {
            Mode::Fun => Mode::Serious,
            Mode::Serious => Mode::Fun,
        }
    }

    pub fn profile(&self) -> &'static ModeProfile {
        match self {
            Mode::Fun => &FUN_PROFILE,
            Mode::Serious => &SERIOUS_PROFILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_original() {
        assert_eq!(Mode::Fun.toggled(), Mode::Serious);
        assert_eq!(Mode::Fun.toggled().toggled(), Mode::Fun);
        assert_eq!(Mode::Serious.toggled().toggled(), Mode::Serious);
    }

    #[test]
    fn wire_names_round_trip() {
        assert_eq!(Mode::from_str("fun"), Some(Mode::Fun));
        assert_eq!(Mode::from_str("SERIOUS"), Some(Mode::Serious));
        assert_eq!(Mode::from_str("playful"), None);
        assert_eq!(Mode::Fun.wire_name(), "fun");
        assert_eq!(Mode::Serious.wire_name(), "serious");
    }

    #[test]
    fn profiles_are_distinct() {
        assert_eq!(Mode::Fun.profile().label, "Fun Einstein");
        assert_eq!(Mode::Serious.profile().label, "Serious Science");
        assert_ne!(Mode::Fun.profile().portrait, Mode::Serious.profile().portrait);
    }
}
