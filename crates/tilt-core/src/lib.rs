//! Platform-free pointer tilt/parallax engine.
//!
//! Input flows `PointerSample -> extract -> ConvergenceEngine -> mapper ->
//! Publisher`; [`TiltController`] owns the pipeline and its attach/detach
//! lifecycle. Front-ends supply a [`Host`] and a [`DeviceClass`].

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod extract;
pub mod host;
pub mod lifecycle;
pub mod mapper;
pub mod point;
pub mod publish;
pub mod style;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use host::*;
pub use lifecycle::*;
pub use mapper::{derive, DerivedParameters, ParamName, ParamValue};
pub use point::*;
pub use publish::{publish, Publisher, RecordingPublisher};
pub use style::*;
