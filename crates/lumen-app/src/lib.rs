pub mod app;
pub mod cli;
pub mod viewer;

pub use app::{describe_scene, App, BootstrapMesh};
pub use viewer::{Viewer, ViewerConfig};
