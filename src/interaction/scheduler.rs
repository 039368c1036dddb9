use gloo_timers::callback::Timeout;

/// Something that can run a task after a delay.
///
/// The returned handle owns the pending task: dropping it before the delay
/// elapses cancels the task. `gloo_timers::callback::Timeout` already behaves
/// this way, which is what the browser implementation relies on.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}
