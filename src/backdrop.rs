use crate::beam::BeamPool;
use crate::config::{BeamsConfig, ColorMode};
use crate::constants::BEAM_COUNT;
use crate::frame::{FrameScheduler, RenderLoop};
use crate::paint::Canvas2d;
use crate::surface::{ResizeSubscription, SurfaceManager};
use crate::viewport::Viewport;
use rand::Rng;

/// One mounted beam background: surface, population, loop and the random
/// source that feeds them. Instances share nothing.
pub struct Backdrop<C, L, S: FrameScheduler, R> {
    config: BeamsConfig,
    surface: SurfaceManager<C, L>,
    pool: BeamPool,
    render_loop: Option<RenderLoop<S>>,
    rng: R,
}

impl<C, L, S, R> Backdrop<C, L, S, R>
where
    C: Canvas2d,
    L: ResizeSubscription,
    S: FrameScheduler,
    R: Rng,
{
    pub fn new(config: BeamsConfig, rng: R) -> Self {
        Self {
            config,
            surface: SurfaceManager::new(),
            pool: BeamPool::default(),
            render_loop: None,
            rng,
        }
    }

    /// Size the surface, seed the population and start the loop.
    pub fn mount(&mut self, canvas: C, listener: L, scheduler: S, viewport: Viewport) {
        if self.render_loop.is_some() {
            self.teardown();
        }
        self.surface.mount(canvas, listener, viewport);
        self.reseed();
        self.render_loop = Some(RenderLoop::start(scheduler));
        log::info!(
            "[backdrop] mounted {:.0}x{:.0} @{}x with {} beams",
            viewport.size.width,
            viewport.size.height,
            viewport.dpr,
            self.pool.len()
        );
    }

    /// Resize notification: re-measure and replace the whole population.
    pub fn resize(&mut self, viewport: Viewport) {
        if !self.is_running() {
            return;
        }
        self.surface.resize(viewport);
        self.reseed();
        log::debug!(
            "[backdrop] resized to {:.0}x{:.0} @{}x",
            viewport.size.width,
            viewport.size.height,
            viewport.dpr
        );
    }

    fn reseed(&mut self) {
        self.pool = BeamPool::generate(
            BEAM_COUNT,
            &mut self.rng,
            self.surface.logical_size(),
            self.config.color,
        );
    }

    /// Frame callback entry point.
    pub fn frame(&mut self, timestamp: f64) {
        if let Some(render_loop) = self.render_loop.as_mut() {
            render_loop.tick(
                timestamp,
                &mut self.surface,
                &mut self.pool,
                &self.config,
                &mut self.rng,
            );
        }
    }

    /// New colour inputs. Beams already in flight keep their colours until
    /// they are recycled or the population is reseeded.
    pub fn set_color_mode(&mut self, color: ColorMode) {
        self.config.color = color;
    }

    /// Stop the loop and release the surface. Idempotent.
    pub fn teardown(&mut self) {
        let stopped = self
            .render_loop
            .as_mut()
            .map(|l| l.stop())
            .unwrap_or(false);
        self.surface.teardown();
        if stopped {
            log::info!("[backdrop] torn down");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.render_loop
            .as_ref()
            .map(|l| l.is_running())
            .unwrap_or(false)
    }

    pub fn config(&self) -> &BeamsConfig {
        &self.config
    }

    pub fn pool(&self) -> &BeamPool {
        &self.pool
    }
}

// Inspection for the host tests.
#[allow(dead_code)]
impl<C, L, S: FrameScheduler, R> Backdrop<C, L, S, R> {
    pub fn pool_mut(&mut self) -> &mut BeamPool {
        &mut self.pool
    }

    pub fn render_loop(&self) -> Option<&RenderLoop<S>> {
        self.render_loop.as_ref()
    }
}
