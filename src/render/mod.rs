#[cfg(feature = "desktop")]
pub mod overlay;
pub mod skeleton;
#[cfg(feature = "desktop")]
pub mod window;

#[cfg(feature = "desktop")]
pub use overlay::draw_overlays;
pub use skeleton::{active_tips, HAND_CONNECTIONS};
#[cfg(feature = "desktop")]
pub use window::MinifbRenderer;
