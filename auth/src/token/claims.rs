use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed token claims.
///
/// A fixed structure rather than an open claim map: every field is
/// mandatory, and a token carrying claims outside this set fails
/// verification as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Subject (principal identifier)
    pub sub: String,

    /// Audience
    pub aud: Vec<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for a principal, expiring `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `issuer` - Issuing service identity
    /// * `subject` - Principal identifier; must not be empty for a token
    ///   that is meant to be issued
    /// * `audience` - Intended recipients; carried as data
    /// * `issued_at` - Issuance instant
    /// * `ttl` - Lifetime from `issued_at`
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        audience: Vec<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            iss: issuer.into(),
            sub: subject.into(),
            aud: audience,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_lifetime_from_ttl() {
        let issued_at = Utc::now();
        let claims = Claims::new(
            "svc",
            "user-1",
            vec!["aud-1".to_string()],
            issued_at,
            Duration::minutes(15),
        );

        assert_eq!(claims.iss, "svc");
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }
}
