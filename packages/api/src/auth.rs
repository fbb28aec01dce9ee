//! Login and logout against the remote auth endpoints, kept in step with the
//! persistence bridge.

use crate::client::CourseApi;
use crate::error::Result;
use store::{Session, SessionBridge, SessionStore};

/// Authenticate and persist the resulting session.
///
/// The credentials go out on the wire and nowhere else: the session is built
/// from the server's response, which carries no password material we keep. On
/// failure nothing is written and the caller's state is untouched.
pub async fn login<C, S>(
    client: &C,
    bridge: &SessionBridge<S>,
    username: &str,
    password: &str,
) -> Result<Session>
where
    C: CourseApi,
    S: SessionStore,
{
    let response = client.login(username, password).await?;
    let session = Session {
        user: response.user,
        token: response.token,
    };
    bridge.save(&session);
    tracing::debug!(user = %session.user.username, "logged in");
    Ok(session)
}

/// Drop the persisted session.
pub fn logout<S: SessionStore>(bridge: &SessionBridge<S>) {
    bridge.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_user, FakeApi};
    use store::MemoryStore;

    #[tokio::test]
    async fn test_login_populates_store_and_storage_identically() {
        let client = FakeApi::authenticating(sample_user());
        let memory = MemoryStore::new();
        let bridge = SessionBridge::new(memory);

        let session = login(&client, &bridge, "pete", "hunter2").await.unwrap();
        assert_eq!(session.user.username, "pete");
        assert_eq!(session.token, "tok-1");

        // the persisted copy restores to exactly what login returned
        assert_eq!(bridge.restore(), Some(session));
    }

    #[tokio::test]
    async fn test_restore_matches_a_fresh_login() {
        let client = FakeApi::authenticating(sample_user());
        let memory = MemoryStore::new();

        let fresh = login(&client, &SessionBridge::new(memory.clone()), "pete", "pw")
            .await
            .unwrap();

        // a later start restores the same authenticated state
        let restored = SessionBridge::new(memory).restore();
        assert_eq!(restored, Some(fresh));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_storage_untouched() {
        let client = FakeApi::failing("invalid username or password");
        let memory = MemoryStore::new();
        let bridge = SessionBridge::new(memory);

        let err = login(&client, &bridge, "pete", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid username or password");
        assert!(bridge.restore().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_the_persisted_session() {
        let client = FakeApi::authenticating(sample_user());
        let bridge = SessionBridge::new(MemoryStore::new());

        login(&client, &bridge, "pete", "pw").await.unwrap();
        logout(&bridge);
        assert!(bridge.restore().is_none());
    }
}
