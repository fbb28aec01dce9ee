//! Favorites synchronizer.
//!
//! The server is updated first; only a successful call mutates the local
//! session and persists it. A failed request leaves the favorite list exactly
//! as it was, so server and client never disagree after an operation.

use crate::client::CourseApi;
use crate::error::Result;
use store::{Course, Session, SessionBridge, SessionStore};

/// Favorite a course for the session's user.
pub async fn add<C, S>(
    client: &C,
    bridge: &SessionBridge<S>,
    session: &mut Session,
    course: Course,
) -> Result<()>
where
    C: CourseApi,
    S: SessionStore,
{
    client
        .add_favorite(&session.token, &session.user.id, course.id)
        .await?;
    session.user.add_favorite(course);
    bridge.save_user(&session.user);
    Ok(())
}

/// Remove a course from the session's favorites.
pub async fn remove<C, S>(
    client: &C,
    bridge: &SessionBridge<S>,
    session: &mut Session,
    course_id: i64,
) -> Result<()>
where
    C: CourseApi,
    S: SessionStore,
{
    client
        .remove_favorite(&session.token, &session.user.id, course_id)
        .await?;
    session.user.remove_favorite(course_id);
    bridge.save_user(&session.user);
    Ok(())
}
