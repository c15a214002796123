//! Library entry for the recipe finder, exposing core logic for integration tests.

pub mod app;
pub mod cache;
pub mod config;
pub mod favorites;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;
pub mod util;
