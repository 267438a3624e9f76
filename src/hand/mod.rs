#[cfg(test)]
pub(crate) mod fixture;
pub mod fingers;
pub mod landmark;

pub use fingers::{Chirality, Finger, FingerExtension};
pub use landmark::{LandmarkError, LandmarkId, LandmarkSnapshot, Point};
