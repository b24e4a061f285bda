//! Scene loop driver.
//!
//! Owns delta-time computation and calls `update(dt)` then `draw()` on
//! every registered object in registration order, every frame. The dt is
//! clamped so a stalled host (pause, surface rebuild) cannot hand the
//! simulation a multi-second step.

use std::time::Instant;

use skirmish_core::constants::MAX_FRAME_DT;

use crate::render::{RenderContext, SceneObject};

/// Monotonic frame clock with a clamped delta.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call, clamped to [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f32 {
        self.dt_since(Instant::now())
    }

    /// Restart timing from now. Called on resume so the paused interval
    /// never reaches the simulation.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    fn dt_since(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

/// The fixed top-level loop: a flat ordered list of scene objects driven
/// once per frame until torn down.
pub struct SceneDriver {
    objects: Vec<Box<dyn SceneObject>>,
    clock: FrameClock,
    paused: bool,
}

impl Default for SceneDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDriver {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            clock: FrameClock::new(),
            paused: false,
        }
    }

    /// Add an object to the end of the draw/update order.
    pub fn register(&mut self, object: Box<dyn SceneObject>) {
        self.objects.push(object);
    }

    /// Run one frame: update every object, then draw every object.
    pub fn frame(&mut self, ctx: &mut dyn RenderContext) {
        if self.paused {
            return;
        }

        let dt = self.clock.tick();
        for object in &mut self.objects {
            object.update(dt);
        }
        for object in &self.objects {
            object.draw(ctx);
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.clock.reset();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::render::NullRenderContext;

    #[test]
    fn test_frame_clock_clamps_long_stall() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_secs(3);
        let dt = clock.dt_since(later);
        assert_eq!(dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_frame_clock_normal_step() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_millis(16);
        let dt = clock.dt_since(later);
        assert!((dt - 0.016).abs() < 1e-4);
    }

    /// Objects record update/draw calls into a shared log so the
    /// registration-order contract is observable.
    struct Recorder {
        id: u32,
        log: Rc<RefCell<Vec<(u32, &'static str)>>>,
    }

    impl SceneObject for Recorder {
        fn update(&mut self, _dt: f32) {
            self.log.borrow_mut().push((self.id, "update"));
        }
        fn draw(&self, _ctx: &mut dyn RenderContext) {
            self.log.borrow_mut().push((self.id, "draw"));
        }
    }

    #[test]
    fn test_update_phase_precedes_draw_phase_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut driver = SceneDriver::new();
        driver.register(Box::new(Recorder {
            id: 1,
            log: Rc::clone(&log),
        }));
        driver.register(Box::new(Recorder {
            id: 2,
            log: Rc::clone(&log),
        }));

        driver.frame(&mut NullRenderContext);

        assert_eq!(
            *log.borrow(),
            vec![(1, "update"), (2, "update"), (1, "draw"), (2, "draw")]
        );
    }

    #[test]
    fn test_paused_driver_skips_frames() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut driver = SceneDriver::new();
        driver.register(Box::new(Recorder {
            id: 1,
            log: Rc::clone(&log),
        }));

        driver.pause();
        assert!(driver.is_paused());
        driver.frame(&mut NullRenderContext);
        assert!(log.borrow().is_empty());

        driver.resume();
        driver.frame(&mut NullRenderContext);
        assert_eq!(log.borrow().len(), 2);
    }
}
