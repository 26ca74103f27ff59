//! Client session lifecycle.
//!
//! ARCHITECTURE
//! ============
//! The session holds a bearer token and the user record it was issued for.
//! The token is persisted through a [`TokenStore`] so it survives restarts;
//! the user record is never persisted and is re-derived by validating the
//! stored token at startup. State transitions are published on a watch
//! channel so embedders can react to login and invalidation without polling.
//!
//! TRADE-OFFS
//! ==========
//! Token persistence failures are logged and swallowed: a session that cannot
//! be written to disk still works for the life of the process, it just will
//! not survive a restart.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::warn;

use crate::api::types::{AuthApi, User};
use crate::token_store::TokenStore;

// =============================================================================
// STATE
// =============================================================================

/// Authentication phase of the client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No validated session is held.
    Unauthenticated,
    /// A credential exchange or token validation is in flight.
    Validating,
    /// A validated token and its user record are held.
    Authenticated,
}

/// Mutable session fields, guarded by one lock.
///
/// Invariant: `user` is `Some` exactly when `state` is
/// [`SessionState::Authenticated`].
#[derive(Debug)]
struct SessionData {
    state: SessionState,
    user: Option<User>,
    token: Option<String>,
}

// =============================================================================
// SHARED CORE
// =============================================================================

/// Session fields shared between [`SessionStore`] and the HTTP client.
///
/// The HTTP client only needs the current bearer token and the ability to
/// invalidate on a 401; it never drives logins, so it holds this inner type
/// rather than the full store.
pub(crate) struct SessionInner {
    data: Mutex<SessionData>,
    changes: watch::Sender<SessionState>,
    store: Box<dyn TokenStore>,
}

impl SessionInner {
    /// Build the core with whatever token the store has persisted.
    ///
    /// With a stored token the session starts [`SessionState::Validating`]:
    /// the token is attached to outbound requests but stays untrusted until
    /// [`SessionStore::validate`] confirms it. Without one it starts
    /// [`SessionState::Unauthenticated`].
    pub(crate) fn new(store: Box<dyn TokenStore>) -> Self {
        let token = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "session: persisted token load failed");
            None
        });
        let state = if token.is_some() {
            SessionState::Validating
        } else {
            SessionState::Unauthenticated
        };
        let (changes, _) = watch::channel(state);
        Self {
            data: Mutex::new(SessionData { state, user: None, token }),
            changes,
            store,
        }
    }

    fn lock_data(&self) -> MutexGuard<'_, SessionData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `apply` under the lock, then publish the resulting state.
    fn transition(&self, apply: impl FnOnce(&mut SessionData)) -> SessionState {
        let state = {
            let mut data = self.lock_data();
            apply(&mut data);
            data.state
        };
        self.changes.send_if_modified(|current| {
            if *current == state {
                false
            } else {
                *current = state;
                true
            }
        });
        state
    }

    /// Current bearer token, if any. Present while a session is live and
    /// between startup and validation of a persisted token.
    pub(crate) fn bearer_token(&self) -> Option<String> {
        self.lock_data().token.clone()
    }

    /// Drop the session unconditionally. Runs for explicit logout and for
    /// any authenticated request that came back 401.
    pub(crate) fn invalidate(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "session: persisted token clear failed");
        }
        self.transition(|data| {
            data.state = SessionState::Unauthenticated;
            data.user = None;
            data.token = None;
        });
    }
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Handle to the client session. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
    auth: Arc<dyn AuthApi>,
}

impl SessionStore {
    pub(crate) fn new(inner: Arc<SessionInner>, auth: Arc<dyn AuthApi>) -> Self {
        Self { inner, auth }
    }

    /// Exchange a Google ID token for a session.
    ///
    /// Never fails to the caller: the outcome is the returned state, also
    /// observable via [`SessionStore::subscribe`]. On success the new token
    /// replaces any previous session and is persisted. On failure the session
    /// ends [`SessionState::Unauthenticated`] and a previously persisted
    /// token is left in place for a later [`SessionStore::validate`].
    pub async fn login(&self, id_token: &str) -> SessionState {
        self.inner.transition(|data| {
            data.state = SessionState::Validating;
            data.user = None;
        });

        match self.auth.exchange_google(id_token).await {
            Ok(resp) => {
                if let Err(e) = self.inner.store.save(&resp.access_token) {
                    warn!(error = %e, "session: token persist failed");
                }
                self.inner.transition(|data| {
                    data.state = SessionState::Authenticated;
                    data.token = Some(resp.access_token);
                    data.user = Some(resp.user);
                })
            }
            Err(e) => {
                warn!(error = %e, "session: login exchange rejected");
                self.inner.transition(|data| {
                    data.state = SessionState::Unauthenticated;
                    data.user = None;
                })
            }
        }
    }

    /// Validate the persisted token loaded at startup.
    ///
    /// With no stored token this is a no-op reporting
    /// [`SessionState::Unauthenticated`]. Otherwise the token is presented to
    /// the current-user endpoint; success restores the user record, any
    /// failure discards the token, persisted copy included.
    pub async fn validate(&self) -> SessionState {
        if self.inner.bearer_token().is_none() {
            return self.inner.transition(|data| {
                data.state = SessionState::Unauthenticated;
                data.user = None;
            });
        }

        self.inner.transition(|data| {
            data.state = SessionState::Validating;
            data.user = None;
        });

        match self.auth.fetch_current_user().await {
            Ok(user) => self.inner.transition(|data| {
                // A concurrent 401 may have dropped the token mid-flight;
                // never resurrect an invalidated session.
                if data.token.is_some() {
                    data.state = SessionState::Authenticated;
                    data.user = Some(user);
                }
            }),
            Err(e) => {
                warn!(error = %e, "session: stored token validation failed");
                self.inner.invalidate();
                SessionState::Unauthenticated
            }
        }
    }

    /// Drop the session and its persisted token. Idempotent.
    pub fn logout(&self) {
        self.inner.invalidate();
    }

    /// The authenticated user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.inner.lock_data().user.clone()
    }

    /// True when a validated session is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state() == SessionState::Authenticated
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.inner.lock_data().state
    }

    /// Subscribe to state transitions. The receiver reports the latest state
    /// via `borrow` and wakes on each subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.changes.subscribe()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
