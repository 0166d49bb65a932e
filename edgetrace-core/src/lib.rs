//! Contour-to-path reconstruction for thinned edge masks.
//!
//! A [`Mask`] of 1-pixel-wide edge strokes is turned into a single ordered
//! [`Traversal`]: the local walker follows each stroke with a fixed neighbour
//! priority, and whenever it stalls the gap bridger searches breadth-first for
//! the nearest untraced cell. The resulting path is emitted as relative
//! [`Delta`]s, classified into a [`MotionPlan`] and can be replayed on any
//! [`PointerDevice`].

pub mod bridge;
pub mod config;
pub mod emitter;
pub mod error;
pub mod mask;
pub mod motion;
pub mod replay;
pub mod traversal;
pub mod types;
pub mod walker;

pub use config::{EdgeConfig, TraceConfig};
pub use error::{DeviceError, TraceError};
pub use mask::Mask;
pub use motion::{classify, Motion, MotionPlan, PlanSummary};
pub use replay::{replay, Pacing, PointerDevice, ReplayStats};
pub use traversal::{trace, trace_in_place, Traversal, TraversalStats};
pub use types::{Coordinate, Delta, EdgePreset, OutputFormat, Stroke};
