//! Terminal client for browsing AI-generated healthy recipes.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod gemini;
pub mod logger;
pub mod recipe;
pub mod state;
pub mod ui;
pub mod utils;
