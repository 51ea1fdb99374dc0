//! Single-active-item groups: tab bars and the FAQ accordion

/// A tab bar with exactly one active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    tabs: Vec<&'static str>,
    active: usize,
}

impl TabGroup {
    /// The first tab starts active
    pub fn new(tabs: &[&'static str]) -> Self {
        Self {
            tabs: tabs.to_vec(),
            active: 0,
        }
    }

    pub fn tabs(&self) -> &[&'static str] {
        &self.tabs
    }

    pub fn active(&self) -> Option<&'static str> {
        self.tabs.get(self.active).copied()
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.active() == Some(tab)
    }

    /// Activate `tab`, deactivating its siblings. Tabs outside the group
    /// leave the selection untouched.
    pub fn select(&mut self, tab: &str) -> bool {
        match self.tabs.iter().position(|t| *t == tab) {
            Some(index) => {
                tracing::debug!(tab, "switched tab");
                self.active = index;
                true
            }
            None => false,
        }
    }
}

/// FAQ accordion: at most one entry open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqGroup {
    open: Option<usize>,
}

impl FaqGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing any other entry; toggling the open entry closes it
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}
