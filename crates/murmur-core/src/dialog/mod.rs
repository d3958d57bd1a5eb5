//! Dialog overlay
//!
//! `DialogController` owns the overlay's state and routes pointer, keyboard
//! and completion events; hosts render the `ViewModel` it produces.

mod controller;
mod layout;
mod notice;
mod state;
mod view_model;

pub use controller::{DialogController, DialogServices};
pub use layout::DialogGeometry;
pub use notice::{Notice, NoticeQueue};
pub use state::{ActiveRegion, ButtonState, DialogState, InputMode};
pub use view_model::{ButtonView, PositionedLine, StatusCaption, ViewModel};
