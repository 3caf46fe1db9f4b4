//! Conversation record types.

use serde::{Deserialize, Serialize};

/// The character side of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// Display name of the character.
    pub name: String,

    /// Persona text. Absent for characters whose definition was never exported.
    #[serde(default)]
    pub description: Option<String>,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub is_human: bool,
}

/// A single chat log between a human and a character.
///
/// Unknown fields in the source record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier of the chat within the dataset.
    pub identifier: String,

    pub bot: Bot,

    #[serde(default)]
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "identifier": "abc123",
            "bot": {"name": "Aria", "description": "A stoic knight."},
            "messages": [
                {"text": "Hello", "is_human": true},
                {"text": "Greetings.", "is_human": false}
            ]
        }"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.identifier, "abc123");
        assert_eq!(conv.bot.name, "Aria");
        assert_eq!(conv.bot.description.as_deref(), Some("A stoic knight."));
        assert_eq!(conv.messages.len(), 2);
        assert!(conv.messages[0].is_human);
        assert!(!conv.messages[1].is_human);
    }

    #[test]
    fn test_missing_and_null_description() {
        let missing: Conversation =
            serde_json::from_str(r#"{"identifier": "a", "bot": {"name": "X"}}"#).unwrap();
        assert_eq!(missing.bot.description, None);
        assert!(missing.messages.is_empty());

        let null: Conversation = serde_json::from_str(
            r#"{"identifier": "b", "bot": {"name": "X", "description": null}, "messages": []}"#,
        )
        .unwrap();
        assert_eq!(null.bot.description, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"identifier": "a", "source": "export-v2", "bot": {"name": "X", "greeting": "hi"}, "messages": []}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv.bot.name, "X");
    }

    #[test]
    fn test_missing_bot_is_error() {
        let result = serde_json::from_str::<Conversation>(r#"{"identifier": "a"}"#);
        assert!(result.is_err());
    }
}
