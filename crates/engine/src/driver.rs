//! Driver loop: clear, render, step, sleep, repeat.

use std::convert::Infallible;

use anyhow::Result;
use tracing::{debug, error, info, trace};

use crate::clock::Clock;
use crate::core::Simulation;
use crate::term::{render_frame_into, Display};
use crate::types::LifeConfig;

pub struct Driver<D: Display, C: Clock> {
    config: LifeConfig,
    display: D,
    clock: C,
    frame: String,
}

impl<D: Display, C: Clock> Driver<D, C> {
    pub fn new(config: LifeConfig, display: D, clock: C) -> Self {
        Self {
            config,
            display,
            clock,
            frame: String::new(),
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_parts(self) -> (D, C) {
        (self.display, self.clock)
    }

    /// One frame: clear, draw the current generation, advance, pause.
    pub fn frame(&mut self, sim: &mut Simulation) -> Result<()> {
        self.display.clear()?;
        render_frame_into(sim.grid(), &mut self.frame);
        self.display.write_frame(&self.frame)?;

        trace!(
            generation = sim.generation(),
            population = sim.grid().population(),
            "frame drawn"
        );

        sim.step();
        self.clock.sleep(self.config.frame_delay);
        Ok(())
    }

    /// Run exactly `frames` frames.
    pub fn run_steps(&mut self, sim: &mut Simulation, frames: u64) -> Result<()> {
        debug!(frames, "running bounded simulation");
        for _ in 0..frames {
            self.frame(sim)?;
        }
        Ok(())
    }

    /// Run until the display fails. Never returns `Ok`.
    pub fn run_forever(&mut self, sim: &mut Simulation) -> Result<Infallible> {
        info!(
            width = self.config.width,
            height = self.config.height,
            density = self.config.density,
            frame_ms = self.config.frame_delay.as_millis() as u64,
            "starting simulation"
        );
        loop {
            if let Err(e) = self.frame(sim) {
                error!(generation = sim.generation(), "display failed: {e:#}");
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::core::Grid;
    use crate::term::{DisplayEvent, MemoryDisplay};

    use anyhow::anyhow;

    struct FailingDisplay {
        writes_left: usize,
    }

    impl Display for FailingDisplay {
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }

        fn write_frame(&mut self, _frame: &str) -> Result<()> {
            if self.writes_left == 0 {
                return Err(anyhow!("stdout closed"));
            }
            self.writes_left -= 1;
            Ok(())
        }
    }

    #[test]
    fn frame_clears_before_drawing() {
        let config = LifeConfig::default();
        let mut driver = Driver::new(config, MemoryDisplay::new(), ManualClock::new());
        let mut sim = Simulation::new(Grid::empty(&config));

        driver.frame(&mut sim).unwrap();

        let events = driver.display().events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DisplayEvent::Clear);
        assert!(matches!(events[1], DisplayEvent::Frame(_)));
        assert_eq!(sim.generation(), 1);
        assert_eq!(driver.clock().sleeps(), &[config.frame_delay]);
    }

    #[test]
    fn run_forever_stops_on_display_error() {
        let config = LifeConfig::default();
        let display = FailingDisplay { writes_left: 3 };
        let mut driver = Driver::new(config, display, ManualClock::new());
        let mut sim = Simulation::new(Grid::empty(&config));

        let err = driver.run_forever(&mut sim).unwrap_err();
        assert_eq!(err.to_string(), "stdout closed");
        assert_eq!(sim.generation(), 3);
        assert_eq!(driver.clock().sleeps().len(), 3);
    }
}
