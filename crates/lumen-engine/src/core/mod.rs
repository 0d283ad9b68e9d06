//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and higher
//! layers, and the per-frame context handed to applications.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
