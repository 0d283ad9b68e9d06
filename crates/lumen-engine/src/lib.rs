//! Lumen engine crate.
//!
//! Owns the scene model, the engine handles that turn geometry into drawable
//! resources, and the platform + GPU runtime used by applications.

pub mod core;
pub mod device;
pub mod engine;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

pub use glam;
