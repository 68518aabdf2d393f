//! TUI widgets for the lineup puzzle

pub mod card;
pub mod hints;
pub mod message;
pub mod status_bar;

pub use card::CardWidget;
pub use hints::HintsWidget;
pub use message::MessageWidget;
pub use status_bar::{HotkeyBarWidget, StatusBarWidget};
