//! Page identifiers and fragment routing

use std::fmt;
use std::str::FromStr;

/// Top-level page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Dashboard,
    Pools,
    Claims,
    Profile,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Dashboard,
        Page::Pools,
        Page::Claims,
        Page::Profile,
    ];

    /// Identifier used in the fragment and `data-page` attributes
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Dashboard => "dashboard",
            Self::Pools => "pools",
            Self::Claims => "claims",
            Self::Profile => "profile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Dashboard => "Dashboard",
            Self::Pools => "Pools",
            Self::Claims => "Claims",
            Self::Profile => "Profile",
        }
    }

    /// Reachable without signing in
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Home | Self::About)
    }

    /// Pages that run an initializer each time they are shown
    pub fn has_initializer(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Pools | Self::Claims | Self::Profile
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Strip a leading `#` from a location hash
pub fn fragment_id(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// How the location hash follows the shell's fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashSync {
    /// Already in step
    Keep,
    /// New history entry, for navigation started in the app
    Push(String),
    /// Overwrite the current entry, for a history move the shell refused
    Replace(String),
}

impl HashSync {
    /// Compare the shell fragment with `location_hash`. `from_history` is
    /// set when the shell change came from a `hashchange` event.
    pub fn plan(shell_fragment: &str, location_hash: &str, from_history: bool) -> Self {
        if shell_fragment.is_empty() || fragment_id(location_hash) == shell_fragment {
            Self::Keep
        } else if from_history {
            Self::Replace(format!("#{}", shell_fragment))
        } else {
            Self::Push(format!("#{}", shell_fragment))
        }
    }
}

/// Secondary action attached to a navigation button (`data-action`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    CreatePool,
    JoinPool,
    FileClaim,
    Vote,
}

impl PageAction {
    /// Resolve a `(page, action)` attribute pair; unknown pairs do nothing
    pub fn parse(page: Page, action: &str) -> Option<Self> {
        match (page, action) {
            (Page::Pools, "create") => Some(Self::CreatePool),
            (Page::Pools, "join") => Some(Self::JoinPool),
            (Page::Claims, "file") => Some(Self::FileClaim),
            (Page::Claims, "vote") => Some(Self::Vote),
            _ => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Self::CreatePool | Self::JoinPool => Page::Pools,
            Self::FileClaim | Self::Vote => Page::Claims,
        }
    }

    /// Tab the action opens
    pub fn tab(&self) -> &'static str {
        match self {
            Self::CreatePool => tabs::CREATE_POOL,
            Self::JoinPool => tabs::AVAILABLE_POOLS,
            Self::FileClaim => tabs::FILE_CLAIM,
            Self::Vote => tabs::PENDING_VOTES,
        }
    }
}

/// Tab identifiers (`data-tab`)
pub mod tabs {
    pub const AVAILABLE_POOLS: &str = "available-pools";
    pub const MY_POOLS: &str = "my-pools";
    pub const CREATE_POOL: &str = "create-pool";

    pub const PENDING_VOTES: &str = "pending-votes";
    pub const MY_CLAIMS: &str = "my-claims";
    pub const FILE_CLAIM: &str = "file-claim";

    pub const POOL_TABS: [&str; 3] = [AVAILABLE_POOLS, MY_POOLS, CREATE_POOL];
    pub const CLAIM_TABS: [&str; 3] = [PENDING_VOTES, MY_CLAIMS, FILE_CLAIM];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_sync_plan() {
        assert_eq!(HashSync::plan("pools", "#pools", false), HashSync::Keep);
        assert_eq!(HashSync::plan("", "#claims", true), HashSync::Keep);
        assert_eq!(
            HashSync::plan("pools", "#home", false),
            HashSync::Push("#pools".to_string())
        );
    }

    #[test]
    fn test_refused_back_navigation_replaces_entry() {
        // Anonymous Back onto #claims: the shell stays on home and the
        // entry is rewritten, so the next Back leaves instead of bouncing
        let mut shell = crate::shell::Shell::new();
        shell.navigate(Page::About);
        shell.handle_fragment("#claims");
        assert_eq!(shell.fragment(), "about");

        assert_eq!(
            HashSync::plan(shell.fragment(), "#claims", true),
            HashSync::Replace("#about".to_string())
        );
    }

    #[test]
    fn test_page_ids_roundtrip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert_eq!(
            "settings".parse::<Page>(),
            Err(UnknownPage("settings".to_string()))
        );
    }

    #[test]
    fn test_public_pages() {
        assert!(Page::Home.is_public());
        assert!(Page::About.is_public());
        assert!(!Page::Claims.is_public());
        assert!(!Page::Home.has_initializer());
        assert!(Page::Profile.has_initializer());
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#pools"), "pools");
        assert_eq!(fragment_id("pools"), "pools");
        assert_eq!(fragment_id(""), "");
    }

    #[test]
    fn test_page_actions() {
        let action = PageAction::parse(Page::Pools, "create").unwrap();
        assert_eq!(action.tab(), tabs::CREATE_POOL);
        assert_eq!(action.page(), Page::Pools);

        assert_eq!(
            PageAction::parse(Page::Claims, "vote").map(|a| a.tab()),
            Some(tabs::PENDING_VOTES)
        );
        assert_eq!(PageAction::parse(Page::Claims, "create"), None);
        assert_eq!(PageAction::parse(Page::Dashboard, "file"), None);
    }
}
