use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::TagIdError;
use super::errors::TagNameError;
use crate::domain::user::models::UserId;

/// Tag aggregate entity, owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub user_id: UserId,
    pub name: TagName,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tag unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId(pub Uuid);

impl TagId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a tag ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TagIdError> {
        Uuid::parse_str(s)
            .map(TagId)
            .map_err(|e| TagIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tag name value type, non-empty and at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagName(String);

impl TagName {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid tag name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace
    /// * `TooLong` - Name is longer than 64 characters
    pub fn new(name: String) -> Result<Self, TagNameError> {
        if name.trim().is_empty() {
            return Err(TagNameError::Empty);
        }

        if name.len() > Self::MAX_LENGTH {
            return Err(TagNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: name.len(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new tag
#[derive(Debug)]
pub struct CreateTagCommand {
    pub name: TagName,
    pub description: Option<String>,
}

/// Command to update an existing tag; only provided fields change.
#[derive(Debug)]
pub struct UpdateTagCommand {
    pub name: Option<TagName>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_rejects_empty() {
        assert_eq!(TagName::new("".to_string()), Err(TagNameError::Empty));
        assert_eq!(TagName::new("   ".to_string()), Err(TagNameError::Empty));
    }

    #[test]
    fn test_tag_name_rejects_too_long() {
        let result = TagName::new("x".repeat(65));
        assert!(matches!(result, Err(TagNameError::TooLong { .. })));
    }

    #[test]
    fn test_tag_name_accepts_reasonable_names() {
        assert!(TagName::new("docker".to_string()).is_ok());
        assert!(TagName::new("kubernetes ops".to_string()).is_ok());
    }
}
