//! Terminal host for the Murmur dialog

pub mod app;
pub mod components;
pub mod handlers;
pub mod input;
pub mod measure;
pub mod theme;
pub mod utils;

// Re-exports
pub use app::App;
