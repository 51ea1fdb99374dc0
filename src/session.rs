//! Simulated authentication state

use crate::model::User;
use crate::notify::Notification;

/// Two-state session; transitions happen only on explicit user action
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    /// Which navigation bar variant to show
    pub fn navbar(&self) -> Navbar {
        if self.is_authenticated() {
            Navbar::Member
        } else {
            Navbar::Public
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navbar {
    Public,
    Member,
}

/// The two simulated entry flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn welcome(&self) -> Notification {
        match self {
            Self::Login => Notification::success(
                "Welcome Back!",
                "You have successfully logged in to Sure Circle.",
            ),
            Self::Signup => Notification::success(
                "Account Created!",
                "Welcome to Sure Circle! Complete your profile to increase your trust score.",
            ),
        }
    }
}

pub fn logged_out_notification() -> Notification {
    Notification::success(
        "Logged Out",
        "You have successfully logged out. Come back soon!",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::AppData;

    #[test]
    fn test_default_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.navbar(), Navbar::Public);
    }

    #[test]
    fn test_authenticated_session() {
        let user = AppData::seeded().users[0].clone();
        let session = Session::Authenticated(user);
        assert_eq!(session.navbar(), Navbar::Member);
        assert_eq!(session.user().map(|u| u.first_name()), Some("Arjun"));
    }
}
