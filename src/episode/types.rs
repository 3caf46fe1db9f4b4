//! Episode and turn types emitted by the builder.

use serde::{Deserialize, Serialize};

/// Who is speaking in a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    /// Instructions given to the model before the conversation.
    System,
    /// The human participant.
    User,
    /// The character, played by the model.
    Model,
}

impl TurnKind {
    /// Kind of a chat message turn, by authorship.
    pub fn for_message(is_human: bool) -> Self {
        if is_human { TurnKind::User } else { TurnKind::Model }
    }
}

impl std::fmt::Display for TurnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnKind::System => write!(f, "system"),
            TurnKind::User => write!(f, "user"),
            TurnKind::Model => write!(f, "model"),
        }
    }
}

/// One utterance with its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub utterance: String,
    pub kind: TurnKind,
}

impl Turn {
    pub fn new(utterance: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            utterance: utterance.into(),
            kind,
        }
    }
}

/// A training example: a system turn followed by the conversation turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub turns: Vec<Turn>,
    pub identifier: String,
}

impl Episode {
    /// Serialize the episode to a single-line JSON string.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_kind_for_message() {
        assert_eq!(TurnKind::for_message(true), TurnKind::User);
        assert_eq!(TurnKind::for_message(false), TurnKind::Model);
    }

    #[test]
    fn test_turn_kind_display_matches_serde() {
        for kind in [TurnKind::System, TurnKind::User, TurnKind::Model] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_episode_json_line() {
        let episode = Episode {
            turns: vec![
                Turn::new("Be Aria.", TurnKind::System),
                Turn::new("Hi\nthere", TurnKind::User),
            ],
            identifier: "characterai-roleplay-c1".to_string(),
        };

        let line = episode.to_json_line().unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(
            line,
            r#"{"turns":[{"utterance":"Be Aria.","kind":"system"},{"utterance":"Hi\nthere","kind":"user"}],"identifier":"characterai-roleplay-c1"}"#
        );

        let parsed: Episode = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, episode);
    }
}
