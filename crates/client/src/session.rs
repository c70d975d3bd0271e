//! Session recovery state shared by all in-flight requests
//!
//! One guard instance lives inside each client, so isolated clients (and
//! tests) never share interceptor state. The mutex is only ever held between
//! await points: a request claims the refresh or enqueues a waiter, then
//! releases the lock before touching the network.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use playdeck_core::credentials::CredentialStore;
use tokio::sync::oneshot;

/// Callback invoked once when the session becomes unrecoverable
pub type LogoutHook = std::sync::Arc<dyn Fn() + Send + Sync>;

/// How an in-flight refresh settled, broadcast to every queued waiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RefreshOutcome {
    /// New access token stored; waiters replay their original request
    Refreshed,
    /// Refresh failed; waiters redirect and fail
    Failed,
}

/// What a 401-hit request must do to join the refresh protocol
pub(crate) enum RefreshTicket {
    /// This request owns the refresh call
    Leader,
    /// A refresh is already in flight; await its settlement
    Waiter(oneshot::Receiver<RefreshOutcome>),
}

#[derive(Default)]
struct RefreshState {
    refreshing: bool,
    // Drained in insertion order when the refresh settles
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

/// Per-client interceptor state: refresh single-flight and logout guard
pub(crate) struct SessionGuard {
    state: Mutex<RefreshState>,
    redirected: AtomicBool,
    logout_hook: Option<LogoutHook>,
}

impl SessionGuard {
    pub(crate) fn new(logout_hook: Option<LogoutHook>) -> Self {
        Self {
            state: Mutex::new(RefreshState::default()),
            redirected: AtomicBool::new(false),
            logout_hook,
        }
    }

    /// Claim the refresh if idle, otherwise enqueue behind the one in flight
    pub(crate) fn begin_refresh(&self) -> RefreshTicket {
        let mut state = self.state.lock().expect("session state lock poisoned");
        if state.refreshing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            RefreshTicket::Waiter(rx)
        } else {
            state.refreshing = true;
            RefreshTicket::Leader
        }
    }

    /// Settle the in-flight refresh and drain all waiters, FIFO
    pub(crate) fn finish_refresh(&self, outcome: RefreshOutcome) {
        let mut state = self.state.lock().expect("session state lock poisoned");
        state.refreshing = false;
        for waiter in state.waiters.drain(..) {
            // A dropped receiver means the waiter went away; nothing to do
            let _ = waiter.send(outcome);
        }
    }

    /// Clear credentials and fire the logout hook, at most once per session
    pub(crate) fn force_logout(&self, store: &dyn CredentialStore) {
        if self.redirected.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::warn!("session unrecoverable, clearing credentials and logging out");
        if let Err(err) = store.clear() {
            tracing::warn!(%err, "failed to clear credential store");
        }
        if let Some(hook) = &self.logout_hook {
            hook();
        }
    }

    /// Re-arm the logout guard after a successful login
    pub(crate) fn reset(&self) {
        self.redirected.store(false, Ordering::SeqCst);
    }

    /// Whether the logout side effect has fired for this session
    pub(crate) fn logged_out(&self) -> bool {
        self.redirected.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("redirected", &self.logged_out())
            .field("has_logout_hook", &self.logout_hook.is_some())
            .finish_non_exhaustive()
    }
}
