//! Login state. The browser app redirected to its login page when no user was
//! stored; here the gate returns what should happen and the UI acts on it.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HrDeskError, Result};
use crate::model::{keys, SessionUser};
use crate::store::{StorageBackend, Store};
use tracing::info;

pub const LOGIN_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCheck {
    Authenticated(SessionUser),
    /// No session on a protected page: send the user to this page.
    Redirect(&'static str),
    /// No session, but already on the login page.
    Anonymous,
}

/// The stored session user, if any. An unreadable entry counts as no session.
pub fn current_user<B: StorageBackend>(store: &Store<B>) -> Option<SessionUser> {
    store.load(keys::CURRENT_USER)
}

pub fn check_auth<B: StorageBackend>(store: &Store<B>, page: &str) -> AuthCheck {
    match current_user(store) {
        Some(user) => AuthCheck::Authenticated(user),
        None if page.contains(LOGIN_PAGE) => AuthCheck::Anonymous,
        None => AuthCheck::Redirect(LOGIN_PAGE),
    }
}

pub fn require_user<B: StorageBackend>(store: &Store<B>) -> Result<SessionUser> {
    current_user(store).ok_or(HrDeskError::NotAuthenticated)
}

pub fn login<B: StorageBackend>(store: &mut Store<B>, user: SessionUser) -> Result<CmdResult> {
    store.save(keys::CURRENT_USER, &user)?;
    info!(username = %user.username, role = %user.role, "logged in");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {}",
        user.display_name()
    )));
    Ok(result.with_user(user))
}

pub fn logout<B: StorageBackend>(store: &mut Store<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match current_user(store) {
        Some(user) => {
            store.remove(keys::CURRENT_USER)?;
            info!(username = %user.username, "logged out");
            result.add_message(CmdMessage::success(format!("Logged out {}", user.username)));
        }
        None => result.add_message(CmdMessage::info("No one is logged in.")),
    }
    Ok(result)
}
