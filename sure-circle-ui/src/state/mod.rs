//! State Management
//!
//! Global application state, browser storage and timer-backed clock.

pub mod clock;
pub mod global;
pub mod storage;

pub use global::{provide_global_state, GlobalState};
