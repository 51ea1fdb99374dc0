//! # Sure Circle
//!
//! Peer-to-peer insurance pool demo. Members join pools, contribute, file
//! claims and vote on them. Everything is mock data: submissions are
//! simulated with fixed delays and nothing outlives the browser's local
//! storage.
//!
//! ## Modules
//!
//! - [`model`] and [`seed`]: records and the seeded dataset
//! - [`shell`]: application state and every navigation/auth transition
//! - [`service`]: simulated backend behind the [`service::CircleService`] trait
//! - [`storage`]: JSON blobs in a key-value store
//! - [`staging`], [`validation`]: claim evidence and form checks
//! - [`server`] (feature `server`): static host for the compiled UI
//!
//! The core is platform-agnostic; the `sure-circle-ui` crate renders it in
//! the browser and the `sure-circle` binary serves that build.
//!
//! ## Quick Start
//!
//! ```rust
//! use sure_circle::router::Page;
//! use sure_circle::shell::Shell;
//!
//! let mut shell = Shell::new();
//!
//! // Protected pages prompt for login while anonymous
//! assert!(!shell.navigate(Page::Dashboard));
//! assert!(shell.modal().is_some());
//! ```

pub mod dashboard;
pub mod format;
pub mod layout;
pub mod model;
pub mod notify;
pub mod router;
pub mod seed;
pub mod service;
pub mod session;
pub mod shell;
pub mod staging;
pub mod storage;
pub mod validation;
pub mod widgets;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use model::{Claim, Pool, Transaction, User};
pub use notify::{Level, Notification};
pub use router::Page;
pub use seed::AppData;
pub use service::{CircleService, Clock, MockCircleService, ServiceError};
pub use session::{AuthMode, Session};
pub use shell::Shell;
pub use storage::{KeyValueStore, Persistence, StoreError};
