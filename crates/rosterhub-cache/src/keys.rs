//! Cache key builders for all Rosterhub cache entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

use uuid::Uuid;

/// Cache key for a session entry by token identifier.
///
/// The value stored under this key is the owning account's email; the
/// entry's TTL tracks the corresponding token's remaining validity.
pub fn session_token(token_id: Uuid) -> String {
    format!("session:token:{token_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_key() {
        let id = Uuid::nil();
        assert_eq!(
            session_token(id),
            "session:token:00000000-0000-0000-0000-000000000000"
        );
    }
}
