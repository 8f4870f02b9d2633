//! Reveal-on-scroll.
//!
//! Elements marked `.reveal` get an `in-view` class, staggered by position,
//! the first time they scroll into view; `#hero .reveal` elements are revealed
//! in sequence as soon as the page has loaded.

mod dom;
mod stagger;

pub use dom::attach_reveal;
pub use stagger::{RevealConfig, Revealer};
