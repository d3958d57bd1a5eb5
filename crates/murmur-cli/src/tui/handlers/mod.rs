//! Event handlers
//!
//! Translate crossterm events into controller calls.

mod keyboard;
mod mouse;
