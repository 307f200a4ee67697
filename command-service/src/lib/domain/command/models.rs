use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::CommandIdError;
use super::errors::CommandTextError;
use crate::domain::tag::models::TagId;
use crate::domain::user::models::UserId;

/// Command aggregate entity: a saved shell invocation owned by one user.
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
    pub user_id: UserId,
    pub command: CommandText,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Command unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(pub Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a command ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, CommandIdError> {
        Uuid::parse_str(s)
            .map(CommandId)
            .map_err(|e| CommandIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty command text value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandText(String);

impl CommandText {
    /// Create a new valid command text.
    ///
    /// # Errors
    /// * `Empty` - Text is empty or whitespace
    pub fn new(text: String) -> Result<Self, CommandTextError> {
        if text.trim().is_empty() {
            return Err(CommandTextError::Empty);
        }

        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to save a new shell command, optionally attached to a tag.
#[derive(Debug)]
pub struct CreateCommandCommand {
    pub command: CommandText,
    pub description: Option<String>,
    pub tag_id: Option<TagId>,
}

/// Command to update a saved shell command; only provided fields change.
#[derive(Debug)]
pub struct UpdateCommandCommand {
    pub command: Option<CommandText>,
    pub description: Option<String>,
}
