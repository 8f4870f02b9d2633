//! Leptos component wrapping the particle backdrop canvas.
//!
//! On mount the canvas is sized to its displayed size, a [`RenderLoop`] is
//! started over its 2D context, and a window `resize` listener rebuilds the
//! field whenever the displayed size changes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animator::RenderLoop;
use super::field::ParticleField;
use super::theme::FieldStyle;
use crate::schedule::BrowserScheduler;

type CanvasLoop = RenderLoop<SmallRng, CanvasRenderingContext2d, BrowserScheduler>;

/// Renders the animated particle backdrop on a canvas element.
///
/// The canvas fills its parent through CSS; its drawing buffer is matched to
/// the displayed size on mount and on every window resize.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(optional)] style: Option<FieldStyle>,
	#[prop(default = "hero-canvas")] id: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let render_loop: Rc<RefCell<Option<CanvasLoop>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if render_loop.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio: canvas has no 2d context, backdrop disabled");
			return;
		};

		let field = ParticleField::new(style.clone(), seeded_rng());
		let (w, h) = fit_to_display(&canvas);
		let animation = RenderLoop::new(field, ctx, BrowserScheduler);
		animation.resize(w, h);
		info!(
			"portfolio: backdrop started with {} nodes",
			animation.with_field(|f| f.nodes().len())
		);
		*render_loop.borrow_mut() = Some(animation);

		let (loop_resize, canvas_resize) = (render_loop.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = fit_to_display(&canvas_resize);
			if let Some(ref animation) = *loop_resize.borrow() {
				animation.resize(nw, nh);
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), resize_cb.borrow().as_ref()) {
			if let Err(e) =
				window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
			{
				warn!("portfolio: resize listener not attached, backdrop size is fixed: {:?}", e);
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="hero-canvas"
			aria-hidden="true"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Match the drawing buffer to the displayed size and return it.
fn fit_to_display(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = (canvas.offset_width().max(0), canvas.offset_height().max(0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w as f64, h as f64)
}

fn seeded_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
