pub mod click;
pub mod cursor;
pub mod matcher;
pub mod window;

pub use click::{ClickDecision, ClickDetector, ClickKind, ClickTrigger, Pinch};
pub use cursor::{CursorMapper, CursorSettings, ScreenSize, TrackingArea, TrackingMargins};
pub use matcher::{match_gesture, Gesture};
pub use window::{WindowCommand, WindowToggle};
