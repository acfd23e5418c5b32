use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::particles::{FieldConfig, FieldPainter, ParticleField};

/// Paints field primitives onto a canvas 2d context.
struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl FieldPainter for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_global_alpha(alpha);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, alpha: f64, width: f64) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_line_width(width);
        self.ctx.move_to(from.0, from.1);
        self.ctx.line_to(to.0, to.1);
        self.ctx.stroke();
    }

    fn reset_alpha(&mut self) {
        self.ctx.set_global_alpha(1.0);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a [`ParticleField`] from the browser's animation-frame callbacks.
///
/// The field lives inside the callback chain and has no other writer.
/// `stop` is idempotent and safe against a tick that is already in flight:
/// the in-flight callback checks the running flag before touching the
/// field and never schedules a successor once it is cleared.
pub struct FieldAnimator {
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl FieldAnimator {
    /// Sizes the canvas to the window, seeds the field and starts the
    /// callback chain. Returns `None` when no window or 2d context is
    /// available; nothing is registered in that case and the hero simply
    /// has no ambient animation.
    pub fn start(canvas: HtmlCanvasElement, config: FieldConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let field = Rc::new(RefCell::new(ParticleField::new(
            width,
            height,
            config,
            &mut rand::thread_rng(),
        )));
        let mut painter = CanvasPainter { ctx };

        let resize_listener = {
            let field = field.clone();
            let canvas = canvas.clone();
            Closure::wrap(Box::new(move || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let dims = window
                    .inner_width()
                    .ok()
                    .and_then(|w| w.as_f64())
                    .zip(window.inner_height().ok().and_then(|h| h.as_f64()));
                if let Some((w, h)) = dims {
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    field.borrow_mut().resize(w, h);
                }
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", resize_listener.as_ref().unchecked_ref())
            .ok()?;

        let running = Rc::new(Cell::new(true));
        let frame_id = Rc::new(Cell::new(None));

        // The closure holds a handle to its own cell so it can reschedule
        // itself, the usual requestAnimationFrame chain.
        let tick: TickClosure = Rc::new(RefCell::new(None));
        {
            let running = running.clone();
            let frame_id = frame_id.clone();
            let tick_handle = tick.clone();
            *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                if !running.get() {
                    return;
                }
                field.borrow_mut().advance(&mut painter);
                frame_id.set(Self::schedule(&tick_handle));
            }) as Box<dyn FnMut()>));
        }
        frame_id.set(Self::schedule(&tick));

        Some(Self {
            running,
            frame_id,
            resize_listener: Some(resize_listener),
        })
    }

    fn schedule(tick: &TickClosure) -> Option<i32> {
        let window = web_sys::window()?;
        let tick = tick.borrow();
        window
            .request_animation_frame(tick.as_ref()?.as_ref().unchecked_ref())
            .ok()
    }

    /// Cancels the pending frame and detaches the resize listener. Later
    /// calls find both handles already taken and do nothing.
    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.frame_id.take() {
                let _ = window.cancel_animation_frame(id);
            }
            if let Some(listener) = self.resize_listener.take() {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        }
    }
}

impl Drop for FieldAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Full-viewport backdrop canvas for the hero section. Purely visual; no
/// sibling reads anything back from it.
#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (),
            move |_| {
                let animator = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| FieldAnimator::start(canvas, FieldConfig::default()));
                if animator.is_none() {
                    info!("no 2d context, hero runs without the particle backdrop");
                }
                move || drop(animator)
            },
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true" />
    }
}
