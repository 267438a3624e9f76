#[cfg(feature = "desktop")]
pub mod hand;
#[cfg(feature = "desktop")]
pub mod preprocess;
pub mod roi;

#[cfg(feature = "desktop")]
pub use hand::HandDetector;
#[cfg(feature = "desktop")]
pub use preprocess::preprocess_for_hand;
pub use roi::{bbox_from_snapshot, remap_to_frame, tracking_roi, BBox, CropRegion};
