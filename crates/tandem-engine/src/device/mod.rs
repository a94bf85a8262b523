//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance on the event thread
//! - acquiring the Adapter/Device/Queue and configuring the Surface
//! - acquiring frames and handing back the surface texture for presentation
//! - the optional debug-message hook the render thread installs
//!
//! A [`Gpu`] is `Send`: it is created on the event thread and moved onto the
//! render thread, which is the only thread that touches it afterwards.

mod debug;
mod gpu;
mod init;
mod surface;

pub use debug::DebugHook;
pub use gpu::{Gpu, GpuFrame};
pub use init::{create_instance, GpuInit};
pub use surface::SurfaceErrorAction;
