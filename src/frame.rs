use crate::beam::{Beam, BeamPool};
use crate::config::BeamsConfig;
use crate::paint::Canvas2d;
use crate::surface::{ResizeSubscription, SurfaceManager};
use rand::Rng;

/// Host animation scheduling primitive (`requestAnimationFrame` in browsers).
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    /// Ask for one more frame callback. `None` if the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
    /// Drop whatever the scheduler holds for delivering callbacks.
    fn release(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    /// Enter `Running` and schedule the first frame.
    pub fn start(scheduler: S) -> Self {
        let mut render_loop = Self {
            scheduler,
            state: LoopState::Running,
            pending: None,
            last_timestamp: None,
            frames: 0,
        };
        render_loop.schedule();
        render_loop
    }

    // Running always has a frame pending; a refused request stops the loop.
    fn schedule(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::error!(
                "[frame] host refused an animation frame; stopping after {} frames",
                self.frames
            );
            self.scheduler.release();
            self.state = LoopState::Stopped;
        }
    }

    /// Milliseconds since the previous frame. The first frame and any
    /// timestamp that goes backwards count as zero.
    fn elapsed(&mut self, timestamp: f64) -> f64 {
        let delta = match self.last_timestamp {
            Some(last) if timestamp > last => timestamp - last,
            _ => 0.0,
        };
        self.last_timestamp = Some(timestamp);
        delta
    }

    /// One scheduled callback: update and draw every beam, then reschedule.
    pub fn tick<C, L, R>(
        &mut self,
        timestamp: f64,
        surface: &mut SurfaceManager<C, L>,
        pool: &mut BeamPool,
        config: &BeamsConfig,
        rng: &mut R,
    ) where
        C: Canvas2d,
        L: ResizeSubscription,
        R: Rng + ?Sized,
    {
        // A callback queued before teardown may still arrive.
        if self.state == LoopState::Stopped {
            return;
        }
        self.pending = None;
        let delta_ms = self.elapsed(timestamp);
        let size = surface.logical_size();
        let opacity_scale = config.intensity.opacity_scale();

        if let Some(canvas) = surface.begin_frame() {
            let total = pool.len();
            for (index, beam) in pool.iter_mut().enumerate() {
                beam.advance(delta_ms);
                if beam.is_past_top() {
                    beam.recycle(rng, index, total, size, config.color);
                }
                draw_beam(canvas, beam, opacity_scale);
            }
        }

        self.frames += 1;
        self.schedule();
    }

    /// Cancel the pending frame and enter `Stopped`. Returns false if the
    /// loop was already stopped.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.scheduler.release();
        self.state = LoopState::Stopped;
        log::debug!("[frame] stopped after {} frames", self.frames);
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

// Inspection for the host tests.
#[allow(dead_code)]
impl<S: FrameScheduler> RenderLoop<S> {
    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pending(&self) -> Option<S::Handle> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn draw_beam<C: Canvas2d>(canvas: &mut C, beam: &Beam, opacity_scale: f64) {
    let stops = beam.gradient(opacity_scale);
    canvas.save();
    canvas.translate(beam.position.x, beam.position.y);
    canvas.rotate(beam.angle_deg.to_radians());
    canvas.fill_vertical_gradient(beam.width, beam.length, &stops);
    canvas.restore();
}
