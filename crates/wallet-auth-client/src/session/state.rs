/*
[INPUT]:  Session mutations from the controller
[OUTPUT]: Shared, readable authentication/session state
[POS]:    Session layer - injectable state store
[UPDATE]: When session fields or reset semantics change
*/

use std::sync::{Arc, RwLock};

use crate::types::UserData;

/// Point-in-time view of the session.
///
/// `Default` is the signed-out state: unauthenticated, idle, no error, no
/// user data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub user_data: Option<UserData>,
}

/// Thread-safe shared session state.
///
/// Cloning yields another handle to the same state, so a consumer (a view
/// layer, a test) can hold a handle while the controller writes through its
/// own. Held only in process memory; the server's cookie is the durable
/// session token.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<SessionSnapshot>>,
}

impl SessionState {
    /// Create a fresh signed-out state
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.inner.read().unwrap().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.read().unwrap().error.clone()
    }

    pub fn user_data(&self) -> Option<UserData> {
        self.inner.read().unwrap().user_data.clone()
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.inner.write().unwrap().is_authenticated = authenticated;
    }

    pub fn set_loading(&self, loading: bool) {
        self.inner.write().unwrap().is_loading = loading;
    }

    pub fn set_error(&self, error: Option<String>) {
        self.inner.write().unwrap().error = error;
    }

    pub fn set_user_data(&self, user_data: Option<UserData>) {
        self.inner.write().unwrap().user_data = user_data;
    }

    /// Drop back to the signed-out state
    pub fn reset(&self) {
        *self.inner.write().unwrap() = SessionSnapshot::default();
    }
}
