//! Integration tests for the recipe finder library.

#[path = "recipes/analysis.rs"]
mod analysis;
#[path = "recipes/cache.rs"]
mod cache;
#[path = "recipes/favorites.rs"]
mod favorites;
#[path = "recipes/shell_flow.rs"]
mod shell_flow;
