//! One-shot alerts carried across a redirect.

use tower_sessions::Session;

use crate::models::{Flash, session_keys};

/// Queue `flash` for the next rendered page, replacing any pending one.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn push(session: &Session, flash: Flash) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FLASH, flash).await
}

/// Take the pending alert, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn take(session: &Session) -> Result<Option<Flash>, tower_sessions::session::Error> {
    session.remove::<Flash>(session_keys::FLASH).await
}
