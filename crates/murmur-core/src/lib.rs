//! Murmur Core - Dialog interaction engine
//!
//! Host-independent logic for a tap-to-ask dialog overlay:
//! - Pointer hit testing and drag scrolling
//! - Memoized text wrapping
//! - Generation-tagged completion requests with stale-result rejection
//! - HTTP completion transport and TOML configuration

pub mod config;
pub mod constants;
pub mod dialog;
pub mod error;
pub mod geometry;
pub mod keyboard;
pub mod request;
pub mod scroll;
pub mod text;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use config::{AppConfig, CompletionConfig, DialogConfig, LayoutConfig};
pub use dialog::{ButtonState, DialogController, DialogServices, ViewModel};
pub use error::{ConfigError, TransportError};
pub use geometry::{Point, Rect, Size};
pub use hit_test::Region;
pub use keyboard::{KeyboardOptions, KeyboardService};
pub use request::{ErrorKind, RequestPhase};
pub use text::{FixedWidthMeasure, TextMeasure};
pub use transport::{Completion, CompletionTransport, HttpTransport, RequestTicket};
