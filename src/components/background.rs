use crate::components::feature_showcase::hue_for;
use crate::error::SiteError;
use crate::interaction::bus::ActiveFeature;
use crate::interaction::hooks::use_active_feature;
use log::debug;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const PARTICLE_COUNT: usize = 70;
const IDLE_HUE: f64 = 220.0;
/// Fraction of the remaining hue distance covered per frame.
const HUE_EASING: f64 = 0.04;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// `rand` yields values in `[0, 1)`.
    pub fn spawn(width: f64, height: f64, mut rand: impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.6,
            vy: (rand() - 0.5) * 0.6,
            radius: 1.0 + rand() * 2.5,
        }
    }

    /// Moves one frame, wrapping around the edges.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x = (self.x + self.vx).rem_euclid(width.max(1.0));
        self.y = (self.y + self.vy).rem_euclid(height.max(1.0));
    }
}

/// Moves `current` toward `target` along the shorter way round the colour wheel.
pub fn approach_hue(current: f64, target: f64, rate: f64) -> f64 {
    let delta = (target - current + 540.0).rem_euclid(360.0) - 180.0;
    (current + delta * rate).rem_euclid(360.0)
}

pub fn target_hue(feature: &ActiveFeature) -> f64 {
    feature.as_deref().and_then(hue_for).unwrap_or(IDLE_HUE)
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop that stops when dropped.
pub struct AnimationLoop {
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Dom("no window".into()))?;
        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let next_frame = {
            let frame_id = frame_id.clone();
            let callback = callback.clone();
            let window = window.clone();
            move |timestamp: f64| {
                tick(timestamp);
                if let Some(cb) = callback.borrow().as_ref() {
                    frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }
        };
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(next_frame) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => frame_id.set(Some(id)),
            Some(Err(e)) => {
                callback.borrow_mut().take();
                return Err(SiteError::Dom(format!("requestAnimationFrame failed: {:?}", e)));
            }
            None => {}
        }

        Ok(Self { frame_id, callback })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.frame_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference back to itself.
        self.callback.borrow_mut().take();
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SiteError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(|| SiteError::Dom("2d canvas context unavailable".into()))
}

fn draw(ctx: &CanvasRenderingContext2d, width: f64, height: f64, particles: &[Particle], hue: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str(&format!("hsla({:.0}, 70%, 65%, 0.55)", hue));
    for p in particles {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

/// Drifting particle field behind the page, tinted by the active feature.
#[function_component(DecorativeBackground)]
pub fn decorative_background() -> Html {
    let canvas_ref = use_node_ref();
    let active = use_active_feature();
    let target = use_mut_ref(|| IDLE_HUE);

    {
        let target = target.clone();
        use_effect_with_deps(
            move |active: &ActiveFeature| {
                *target.borrow_mut() = target_hue(active);
                || ()
            },
            active,
        );
    }

    {
        use_effect_with_deps(
            move |canvas_ref: &NodeRef| {
                let animation = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let (width, height) = web_sys::window()
                        .map(|w| {
                            let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                            (dim(w.inner_width()), dim(w.inner_height()))
                        })
                        .unwrap_or((0.0, 0.0));
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    let ctx = match context_2d(&canvas) {
                        Ok(ctx) => ctx,
                        Err(e) => {
                            debug!("background disabled: {}", e);
                            return None;
                        }
                    };
                    let random = web_sys::js_sys::Math::random;
                    let mut particles: Vec<Particle> = (0..PARTICLE_COUNT)
                        .map(|_| Particle::spawn(width, height, random))
                        .collect();
                    let mut hue = IDLE_HUE;

                    match AnimationLoop::start(move |_| {
                        hue = approach_hue(hue, *target.borrow(), HUE_EASING);
                        particles.iter_mut().for_each(|p| p.step(width, height));
                        draw(&ctx, width, height, &particles, hue);
                    }) {
                        Ok(animation) => Some(animation),
                        Err(e) => {
                            debug!("background disabled: {}", e);
                            None
                        }
                    }
                });

                move || drop(animation)
            },
            canvas_ref.clone(),
        );
    }

    html! {
        <>
            <canvas ref={canvas_ref} class="decorative-background" aria-hidden="true" />
            <style>
                {r#"
                .decorative-background {
                    position: fixed;
                    inset: 0;
                    width: 100vw;
                    height: 100vh;
                    z-index: 0;
                    pointer-events: none;
                    background: radial-gradient(circle at 30% 20%, #151b29 0%, #0b0d12 70%);
                }
                "#}
            </style>
        </>
    }
}
