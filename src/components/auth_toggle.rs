//! Header sign-in affordance. Purely cosmetic: no credentials are involved.

pub const SIGN_IN_LABEL: &str = "Sign In";
/// Glyph shown instead of a label once signed in.
pub const SIGN_OUT_ICON: &str = "⇥";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn,
}

impl AuthState {
    pub fn toggled(self) -> Self {
        match self {
            AuthState::SignedOut => AuthState::SignedIn,
            AuthState::SignedIn => AuthState::SignedOut,
        }
    }
}

/// What the auth button shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLabel {
    Text(&'static str),
    Icon(&'static str),
}

impl AuthLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthLabel::Text(s) | AuthLabel::Icon(s) => s,
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthToggle {
    state: AuthState,
}

impl AuthToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    pub fn is_signed_in(&self) -> bool {
        self.state() == AuthState::SignedIn
    }

    pub fn handle_auth_click(&mut self) {
        self.state = self.state.toggled();
        tracing::debug!(state = ?self.state, "auth toggled");
    }

    pub fn label(&self) -> AuthLabel {
        match self.state {
            AuthState::SignedOut => AuthLabel::Text(SIGN_IN_LABEL),
            AuthState::SignedIn => AuthLabel::Icon(SIGN_OUT_ICON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_out_with_sign_in_label() {
        let toggle = AuthToggle::new();
        assert_eq!(toggle.state(), AuthState::SignedOut);
        assert_eq!(toggle.label(), AuthLabel::Text("Sign In"));
    }

    #[test]
    fn test_click_shows_icon_only() {
        let mut toggle = AuthToggle::new();
        toggle.handle_auth_click();
        assert!(toggle.is_signed_in());
        assert_eq!(toggle.label(), AuthLabel::Icon(SIGN_OUT_ICON));
        assert!(!toggle.label().as_str().contains("Sign Out"));
    }

    #[test]
    fn test_two_clicks_are_identity() {
        for start in [AuthState::SignedOut, AuthState::SignedIn] {
            assert_eq!(start.toggled().toggled(), start);
        }
        let mut toggle = AuthToggle::new();
        toggle.handle_auth_click();
        toggle.handle_auth_click();
        assert_eq!(toggle.state(), AuthState::SignedOut);
        assert_eq!(toggle.label().as_str(), "Sign In");
    }
}
