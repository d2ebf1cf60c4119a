//! chart-tick: per-tick state for chart axes.
//!
//! A tick is the tick mark, grid line and label drawn for one axis value.
//! This crate keeps their lifecycle (creation, repositioning, animated
//! transitions, suppression and teardown) behind explicit collaborator
//! traits: the owning axis ([`axis::AxisContext`]) and the drawing surface
//! ([`render::RenderSurface`]).

pub mod axis;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod tick;

pub use axis::{AxisContext, CartesianAxis};
pub use error::{TickError, TickResult};
pub use render::{RecordingSurface, RenderSurface};
pub use tick::{Tick, TickFactory, TickFactoryOptions, TickSet};
