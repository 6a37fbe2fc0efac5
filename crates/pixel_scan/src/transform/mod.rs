//! Transformations that wrap a [`crate::stream::PointStream`] and are themselves point
//! streams.
//!
//! Each transformation owns exactly one upstream stream, so any number of them can be
//! stacked on top of any scan:
//! - pointwise maps: [`reflection`], [`rotation`], [`scale`], [`translation`], [`swap`],
//!   [`snap`];
//! - filters that may pull several upstream points per emitted point: [`clip`], [`skip`],
//!   [`sample`];
//! - [`reservoir`], which drains its upstream when constructed and then replays a fixed
//!   random sample.
pub mod clip;
pub mod map;
pub mod reservoir;
pub mod sample;
pub mod skip;

pub use clip::{clip, Clip, ClipConfig};
pub use map::{
    reflection, rotation, scale, snap, swap, translation, Reflection, Rotation, Scale, Snap,
    Swap, Translation,
};
pub use reservoir::{reservoir, Reservoir};
pub use sample::{sample, Sample};
pub use skip::{skip, Skip, SkipConfig};
