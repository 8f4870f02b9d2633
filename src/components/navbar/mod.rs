//! Navigation bar behaviour.
//!
//! - the bar gets a `scrolled` class once the page leaves the top
//! - the link of the section under the viewport top is marked `active`
//! - on small screens `#nav-toggle` opens and closes the link list

mod dom;
mod menu;
mod scroll;

pub use dom::{attach_menu_toggle, attach_scroll_spy};
pub use menu::MenuState;
pub use scroll::{NavConfig, SectionBounds};
