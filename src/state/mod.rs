//! Application state management module.
//!
//! This module contains the single source of truth for everything rendered:
//! - Main `State` struct holding recipes, favorites, view and overlay
//! - Navigation types (View, Focus)
//! - State error handling

mod error;
mod navigation;

pub use error::StateError;
pub use navigation::{Focus, View};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
