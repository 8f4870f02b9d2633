//! Self-rescheduling render loop for a [`ParticleField`].
//!
//! Each frame renders once and then asks the [`Scheduler`] for the next one.
//! Only one frame is ever pending: `resize` cancels it before rebuilding the
//! field, so a burst of resize events cannot stack up parallel loops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;
use rand::Rng;

use super::field::ParticleField;
use super::surface::Surface;
use crate::schedule::Scheduler;

struct LoopState<R, S, H> {
	field: ParticleField<R>,
	surface: S,
	pending: Option<H>,
	frames: u64,
}

/// Drives a particle field against a surface, one scheduled frame at a time.
///
/// Scheduled callbacks hold a weak reference, so dropping the loop stops it.
pub struct RenderLoop<R, S, C: Scheduler> {
	state: Rc<RefCell<LoopState<R, S, C::FrameHandle>>>,
	scheduler: C,
}

impl<R, S, C> RenderLoop<R, S, C>
where
	R: Rng + 'static,
	S: Surface + 'static,
	C: Scheduler,
{
	pub fn new(field: ParticleField<R>, surface: S, scheduler: C) -> Self {
		Self {
			state: Rc::new(RefCell::new(LoopState {
				field,
				surface,
				pending: None,
				frames: 0,
			})),
			scheduler,
		}
	}

	/// Render a frame now and keep going, unless a frame is already pending.
	pub fn start(&self) {
		if self.is_running() {
			return;
		}
		Self::frame(&self.state, &self.scheduler);
	}

	/// Run exactly one frame now, replacing whatever frame was pending.
	pub fn tick(&self) {
		self.stop();
		Self::frame(&self.state, &self.scheduler);
	}

	/// Cancel the pending frame, rebuild the field for the new surface size
	/// and restart the loop.
	pub fn resize(&self, width: f64, height: f64) {
		self.stop();
		{
			let mut state = self.state.borrow_mut();
			state.field.resize(width, height);
			debug!(
				"portfolio: particle field resized to {}x{} ({} nodes)",
				state.field.width(),
				state.field.height(),
				state.field.nodes().len()
			);
		}
		Self::frame(&self.state, &self.scheduler);
	}

	/// Cancel the pending frame, if any.
	pub fn stop(&self) {
		let pending = self.state.borrow_mut().pending.take();
		if let Some(handle) = pending {
			self.scheduler.cancel_frame(handle);
		}
	}

	/// Whether a next frame is scheduled.
	pub fn is_running(&self) -> bool {
		self.state.borrow().pending.is_some()
	}

	/// Frames rendered since the loop was created.
	pub fn frames(&self) -> u64 {
		self.state.borrow().frames
	}

	/// Read access to the field, e.g. for inspection in tests.
	pub fn with_field<T>(&self, f: impl FnOnce(&ParticleField<R>) -> T) -> T {
		f(&self.state.borrow().field)
	}

	/// Read access to the surface.
	pub fn with_surface<T>(&self, f: impl FnOnce(&S) -> T) -> T {
		f(&self.state.borrow().surface)
	}

	/// One frame: render and advance, then schedule the next frame.
	fn frame(state: &Rc<RefCell<LoopState<R, S, C::FrameHandle>>>, scheduler: &C) {
		{
			let mut guard = state.borrow_mut();
			let LoopState {
				field,
				surface,
				pending,
				frames,
			} = &mut *guard;
			*pending = None;
			field.render_frame(surface);
			*frames += 1;
		}

		let next = Self::next_frame(Rc::downgrade(state), scheduler.clone());
		let handle = scheduler.request_frame(next);
		state.borrow_mut().pending = handle;
	}

	fn next_frame(
		state: Weak<RefCell<LoopState<R, S, C::FrameHandle>>>,
		scheduler: C,
	) -> Box<dyn FnOnce()> {
		Box::new(move || {
			if let Some(state) = state.upgrade() {
				Self::frame(&state, &scheduler);
			}
		})
	}
}

impl<R, S, C: Scheduler> Drop for RenderLoop<R, S, C> {
	fn drop(&mut self) {
		if let Ok(mut state) = self.state.try_borrow_mut() {
			if let Some(handle) = state.pending.take() {
				self.scheduler.cancel_frame(handle);
			}
		}
	}
}
