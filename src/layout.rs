//! Responsive layout decisions

/// Widths at or below this get the single-column layout
pub const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// `grid-template-columns` for the dashboard grid
    pub fn dashboard_columns(&self) -> &'static str {
        match self {
            Self::Mobile => "1fr",
            Self::Desktop => "repeat(auto-fit, minmax(300px, 1fr))",
        }
    }

    /// `grid-template-columns` for the pools grid
    pub fn pools_columns(&self) -> &'static str {
        match self {
            Self::Mobile => "1fr",
            Self::Desktop => "repeat(auto-fit, minmax(350px, 1fr))",
        }
    }
}
