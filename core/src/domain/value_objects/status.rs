//! Status flags shared by the catalog resources and notifications

use serde::{Deserialize, Serialize};

/// Whether a currency or language is offered to shoppers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Show,
    Hide,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Show => "show",
            Visibility::Hide => "hide",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Visibility::Show),
            "hide" => Ok(Visibility::Hide),
            _ => Err(format!("Invalid visibility: {}", s)),
        }
    }
}

/// Read state of a notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Read,
    #[default]
    Unread,
}

impl ReadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStatus::Read => "read",
            ReadStatus::Unread => "unread",
        }
    }
}

impl std::fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(ReadStatus::Read),
            "unread" => Ok(ReadStatus::Unread),
            _ => Err(format!("Invalid read status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Visibility::default(), Visibility::Show);
        assert_eq!(ReadStatus::default(), ReadStatus::Unread);
    }

    #[test]
    fn test_parse_and_display_agree() {
        for visibility in [Visibility::Show, Visibility::Hide] {
            assert_eq!(visibility.to_string().parse::<Visibility>(), Ok(visibility));
        }
        assert!("visible".parse::<Visibility>().is_err());
        assert!("READ".parse::<ReadStatus>().is_err());
    }
}
