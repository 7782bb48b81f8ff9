//! Galleria Tour - Navigation and camera control
//!
//! Provides the point-of-interest registry, the exclusive-selection
//! navigation controller, the superseding camera transition engine, and the
//! live camera rig.

pub mod config;
pub mod navigation;
pub mod poi;
pub mod rig;
pub mod transition;

pub use config::TourConfig;
pub use navigation::{NavigationController, TransitionRequest};
pub use poi::PointOfInterest;
pub use rig::CameraRig;
pub use transition::TransitionEngine;
