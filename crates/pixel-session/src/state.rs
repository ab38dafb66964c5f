//! Session identity state.

use crate::cart_code::CartCodeStore;
use crate::token::TokenStore;
use crate::{ClientStore, SessionError};
use serde::{Deserialize, Serialize};

/// Rank of the signed-in user, derived from the backend profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Sells products through the marketplace.
    Vendor,
    /// Staff account.
    Admin,
}

impl Role {
    /// Get the role as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }

    /// Map the backend profile flags to a role. Staff wins over vendor.
    pub fn from_backend(is_staff: bool, role: Option<&str>) -> Self {
        if is_staff {
            Role::Admin
        } else if role == Some("vendor") {
            Role::Vendor
        } else {
            Role::Customer
        }
    }
}

/// Lifecycle events that change the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were accepted and a token stored.
    LoggedIn { username: String, role: Role },
    /// The profile endpoints answered for an existing token.
    ProfileLoaded { username: String, role: Role },
    /// The token was removed.
    LoggedOut,
}

/// Who the client believes is signed in.
///
/// A plain value passed to the views that need it. Every observable change
/// goes through [`SessionState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    username: Option<String>,
    role: Role,
}

impl SessionState {
    /// The signed-out state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Apply a lifecycle event.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoggedIn { username, role }
            | SessionEvent::ProfileLoaded { username, role } => {
                self.username = Some(username);
                self.role = role;
            }
            SessionEvent::LoggedOut => {
                self.username = None;
                self.role = Role::Customer;
            }
        }
    }

    /// The signed-in username, if any.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether anyone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }

    /// The current role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the signed-in user is staff.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the signed-in user is a vendor.
    pub fn is_vendor(&self) -> bool {
        self.role == Role::Vendor
    }
}

/// Sign out: drop the stored token and cart code, reset the state.
///
/// The anonymous cart does not survive an explicit sign-out.
pub fn sign_out(store: &ClientStore, state: &mut SessionState) -> Result<(), SessionError> {
    TokenStore::new(store).clear()?;
    CartCodeStore::new(store).clear()?;
    state.apply(SessionEvent::LoggedOut);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_mapping() {
        assert_eq!(Role::from_backend(true, None), Role::Admin);
        assert_eq!(Role::from_backend(true, Some("vendor")), Role::Admin);
        assert_eq!(Role::from_backend(false, Some("vendor")), Role::Vendor);
        assert_eq!(Role::from_backend(false, Some("customer")), Role::Customer);
        assert_eq!(Role::from_backend(false, None), Role::Customer);
    }

    #[test]
    fn test_login_and_logout_cycle() {
        let mut state = SessionState::anonymous();
        assert!(!state.is_authenticated());

        state.apply(SessionEvent::LoggedIn {
            username: "lucia".to_string(),
            role: Role::Customer,
        });
        assert!(state.is_authenticated());
        assert_eq!(state.username(), Some("lucia"));
        assert!(!state.is_admin());

        state.apply(SessionEvent::ProfileLoaded {
            username: "lucia".to_string(),
            role: Role::Admin,
        });
        assert!(state.is_admin());

        state.apply(SessionEvent::LoggedOut);
        assert_eq!(state, SessionState::anonymous());
    }

    #[test]
    fn test_sign_out_clears_storage() {
        use crate::token::AccessToken;
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        let store = ClientStore::open_default().unwrap();
        let payload = URL_SAFE_NO_PAD.encode(br#"{"exp":9999999999}"#);
        let token = AccessToken::parse(format!("head.{}.sig", payload)).unwrap();
        TokenStore::new(&store).save(&token).unwrap();
        CartCodeStore::new(&store).obtain().unwrap();

        let mut state = SessionState::anonymous();
        state.apply(SessionEvent::LoggedIn {
            username: "lucia".to_string(),
            role: Role::Vendor,
        });

        sign_out(&store, &mut state).unwrap();
        assert!(!state.is_authenticated());
        assert!(TokenStore::new(&store).load().unwrap().is_none());
        assert!(CartCodeStore::new(&store).load().unwrap().is_none());
    }
}
