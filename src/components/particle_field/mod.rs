//! Animated particle backdrop for the hero section.
//!
//! A field of slowly drifting nodes, bouncing off the surface edges, with
//! faint lines joining every pair closer than a threshold:
//! - [`ParticleField`] owns the nodes and does one frame of work at a time
//! - [`RenderLoop`] keeps frames coming through an injectable [`Scheduler`]
//! - [`ParticleFieldCanvas`] mounts it on a canvas and follows window resizes
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::{FieldStyle, ParticleFieldCanvas};
//!
//! view! { <ParticleFieldCanvas style=FieldStyle { link_distance: 100.0, ..Default::default() } /> }
//! ```
//!
//! [`Scheduler`]: crate::schedule::Scheduler

mod animator;
mod component;
mod field;
mod surface;
pub mod theme;

pub use animator::RenderLoop;
pub use component::ParticleFieldCanvas;
pub use field::{Link, Node, ParticleField};
pub use surface::Surface;
pub use theme::{Color, FieldStyle};
