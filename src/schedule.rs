//! Frame and timeout scheduling.
//!
//! Everything time-driven in the behavior layer (the particle render loop,
//! staggered reveals, status auto-clear) goes through [`Scheduler`]. In the
//! browser that is [`BrowserScheduler`], backed by `requestAnimationFrame` and
//! `setTimeout`; tests use [`ManualScheduler`] to single-step frames and move
//! a virtual clock.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{
	AnimationFrameRequestHandle, TimeoutHandle, request_animation_frame_with_handle,
	set_timeout_with_handle,
};
use log::warn;

/// A deferred unit of work.
pub type Task = Box<dyn FnOnce()>;

/// Schedules work for the next display refresh or after a delay.
///
/// Scheduling returns `None` when the environment refused the request; callers
/// treat that as "nothing pending".
pub trait Scheduler: Clone + 'static {
	/// Cancellation handle for a requested frame.
	type FrameHandle: 'static;
	/// Cancellation handle for a pending timeout.
	type TimeoutHandle: 'static;

	/// Run `task` once, before the next repaint.
	fn request_frame(&self, task: Task) -> Option<Self::FrameHandle>;

	/// Cancel a frame that has not run yet.
	fn cancel_frame(&self, handle: Self::FrameHandle);

	/// Run `task` once after `delay`.
	fn set_timeout(&self, delay: Duration, task: Task) -> Option<Self::TimeoutHandle>;

	/// Cancel a timeout that has not fired yet.
	fn clear_timeout(&self, handle: Self::TimeoutHandle);
}

/// Scheduler backed by the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
	type FrameHandle = AnimationFrameRequestHandle;
	type TimeoutHandle = TimeoutHandle;

	fn request_frame(&self, task: Task) -> Option<Self::FrameHandle> {
		match request_animation_frame_with_handle(task) {
			Ok(handle) => Some(handle),
			Err(e) => {
				warn!("portfolio: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&self, handle: Self::FrameHandle) {
		handle.cancel();
	}

	fn set_timeout(&self, delay: Duration, task: Task) -> Option<Self::TimeoutHandle> {
		match set_timeout_with_handle(task, delay) {
			Ok(handle) => Some(handle),
			Err(e) => {
				warn!("portfolio: setTimeout failed: {:?}", e);
				None
			}
		}
	}

	fn clear_timeout(&self, handle: Self::TimeoutHandle) {
		handle.clear();
	}
}

/// Identifier handed out by [`ManualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManualHandle(u64);

#[derive(Default)]
struct ManualState {
	now: Duration,
	next_id: u64,
	frames: Vec<(u64, Task)>,
	timeouts: Vec<(u64, Duration, Task)>,
}

impl ManualState {
	fn next_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}
}

/// Deterministic scheduler with a virtual clock.
///
/// Clones share the same queues, so a test can keep one clone while the code
/// under test owns another. Borrow of the internal state is released before
/// any task runs, so tasks may freely schedule more work.
#[derive(Clone, Default)]
pub struct ManualScheduler {
	inner: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
	/// Create a scheduler with the clock at zero and nothing queued.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current virtual time.
	pub fn now(&self) -> Duration {
		self.inner.borrow().now
	}

	/// Number of frame requests waiting for [`run_frame`](Self::run_frame).
	pub fn pending_frames(&self) -> usize {
		self.inner.borrow().frames.len()
	}

	/// Number of timeouts that have not fired yet.
	pub fn pending_timeouts(&self) -> usize {
		self.inner.borrow().timeouts.len()
	}

	/// Run every frame requested before this call. Frames requested while
	/// running wait for the next call. Returns how many frames ran.
	pub fn run_frame(&self) -> usize {
		let frames = mem::take(&mut self.inner.borrow_mut().frames);
		let count = frames.len();
		for (_, task) in frames {
			task();
		}
		count
	}

	/// Call [`run_frame`](Self::run_frame) `n` times.
	pub fn run_frames(&self, n: usize) {
		for _ in 0..n {
			self.run_frame();
		}
	}

	/// Move the clock forward by `by`, firing due timeouts in due order
	/// (ties in scheduling order). Returns how many fired.
	pub fn advance(&self, by: Duration) -> usize {
		let target = self.now() + by;
		let mut fired = 0;
		loop {
			let next = {
				let mut state = self.inner.borrow_mut();
				let due = state
					.timeouts
					.iter()
					.enumerate()
					.filter(|(_, (_, at, _))| *at <= target)
					.min_by_key(|(_, (id, at, _))| (*at, *id))
					.map(|(i, _)| i);
				match due {
					Some(i) => {
						let (_, at, task) = state.timeouts.remove(i);
						state.now = at;
						Some(task)
					}
					None => {
						state.now = target;
						None
					}
				}
			};
			match next {
				Some(task) => {
					task();
					fired += 1;
				}
				None => break,
			}
		}
		fired
	}
}

impl Scheduler for ManualScheduler {
	type FrameHandle = ManualHandle;
	type TimeoutHandle = ManualHandle;

	fn request_frame(&self, task: Task) -> Option<Self::FrameHandle> {
		let mut state = self.inner.borrow_mut();
		let id = state.next_id();
		state.frames.push((id, task));
		Some(ManualHandle(id))
	}

	fn cancel_frame(&self, handle: Self::FrameHandle) {
		self.inner
			.borrow_mut()
			.frames
			.retain(|(id, _)| *id != handle.0);
	}

	fn set_timeout(&self, delay: Duration, task: Task) -> Option<Self::TimeoutHandle> {
		let mut state = self.inner.borrow_mut();
		let id = state.next_id();
		let at = state.now + delay;
		state.timeouts.push((id, at, task));
		Some(ManualHandle(id))
	}

	fn clear_timeout(&self, handle: Self::TimeoutHandle) {
		self.inner
			.borrow_mut()
			.timeouts
			.retain(|(id, _, _)| *id != handle.0);
	}
}
