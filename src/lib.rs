pub mod action;
pub mod camera;
pub mod config;
pub mod detector;
pub mod engine;
pub mod fps;
pub mod gesture;
pub mod hand;
pub mod render;
