//! Open/closed state of the mobile navigation menu.

/// The mobile menu is either open or closed; the toggle button mirrors it
/// through `aria-expanded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool,
}

impl MenuState {
	pub fn is_open(self) -> bool {
		self.open
	}

	/// Flip the state and return whether the menu is now open.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	/// Value for the toggle button's `aria-expanded` attribute.
	pub fn aria_expanded(self) -> &'static str {
		if self.open { "true" } else { "false" }
	}
}
