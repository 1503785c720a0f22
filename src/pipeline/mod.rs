pub mod animation;
pub mod config;
pub mod contour;
pub mod orchestrator;
