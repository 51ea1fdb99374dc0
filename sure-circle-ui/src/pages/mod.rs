//! Pages
//!
//! One component per page section. The app mounts a page only while the
//! shell shows it.

pub mod about;
pub mod claims;
pub mod dashboard;
pub mod home;
pub mod pools;
pub mod profile;

pub use about::About;
pub use claims::Claims;
pub use dashboard::Dashboard;
pub use home::Home;
pub use pools::Pools;
pub use profile::Profile;
