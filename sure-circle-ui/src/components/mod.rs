//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod auth_modal;
pub mod faq;
pub mod field;
pub mod gauge;
pub mod loading;
pub mod nav;
pub mod reveal;
pub mod stat_card;
pub mod tabs;
pub mod toast;

pub use auth_modal::AuthModal;
pub use faq::Faq;
pub use field::{TextField, TextAreaField};
pub use gauge::TrustGauge;
pub use loading::ButtonLabel;
pub use nav::Nav;
pub use reveal::Reveal;
pub use stat_card::StatCard;
pub use tabs::TabBar;
pub use toast::Toast;
