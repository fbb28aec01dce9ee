//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, UserProfile};

use crate::make_bridge;

/// Client-side session state: the single source of truth every page reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    /// True until the persisted session has been restored.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Replace the profile wholesale. Inputs are trusted as already validated
    /// by the server response.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Replace the bearer token.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Adopt a full session (fresh login or restore).
    pub fn apply(&mut self, session: Session) {
        self.user = Some(session.user);
        self.token = Some(session.token);
        self.loading = false;
    }

    /// Back to unauthenticated.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// The authenticated pairing, if both halves are present.
    pub fn session(&self) -> Option<Session> {
        match (&self.user, &self.token) {
            (Some(user), Some(token)) => Some(Session {
                user: user.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component; it restores the persisted session on
/// mount, before any route guard runs.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);

    // Restore the stored session on mount
    let _ = use_resource(move || async move {
        let bridge = make_bridge();
        let mut next = SessionState {
            loading: false,
            ..SessionState::default()
        };
        if let Some(session) = bridge.restore() {
            next.apply(session);
        }
        state.set(next);
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Button that ends the session: clears the store and the persisted copy,
/// then returns to the home view.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut state = use_session();

    let onclick = move |_| {
        api::auth::logout(&make_bridge());
        state.write().clear();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
