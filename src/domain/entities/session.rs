use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// The authenticated context a JMAP method runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxSession {
    session_id: String,
    user: User,
}

impl MailboxSession {
    pub fn new(session_id: impl Into<String>, user: User) -> Self {
        Self {
            session_id: session_id.into(),
            user,
        }
    }

    pub fn for_user(username: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), User::new(username))
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

/// A persisted bearer-token session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub username: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: String, token: String, duration_hours: i64, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            token,
            expires_at: now + Duration::hours(duration_hours),
            created_at: now,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    pub fn to_mailbox_session(&self) -> MailboxSession {
        MailboxSession::new(self.id.clone(), User::new(self.username.clone()))
    }
}

/// Generate secure random token for sessions (32 bytes = 64 hex characters)
pub fn generate_session_token() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_session_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let session = Session::new("alice".to_string(), generate_session_token(), 9, now);

        assert!(!session.is_expired_at(now));
        assert!(!session.is_expired_at(now + Duration::hours(9)));
        assert!(session.is_expired_at(now + Duration::hours(9) + Duration::seconds(1)));
    }

    #[test]
    fn test_mailbox_session_carries_username() {
        let now = Utc::now();
        let session = Session::new("bob".to_string(), "token".to_string(), 1, now);
        let mailbox_session = session.to_mailbox_session();

        assert_eq!(mailbox_session.user().username(), "bob");
        assert_eq!(mailbox_session.session_id(), session.id);
    }

    #[test]
    fn test_generated_tokens_are_unique_hex() {
        let first = generate_session_token();
        let second = generate_session_token();

        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }
}
