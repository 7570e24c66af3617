//! Simulation driver.
//!
//! Ties the core, the display and a [`Clock`] together. The clock and the
//! display are injected, so tests can run any number of frames with no
//! wall-clock delay and no terminal.
//!
//! ```
//! use tui_life_core::{Grid, Simulation};
//! use tui_life_engine::{Driver, ManualClock};
//! use tui_life_term::MemoryDisplay;
//! use tui_life_types::LifeConfig;
//!
//! let config = LifeConfig::default();
//! let mut sim = Simulation::new(Grid::seeded(&config, 7));
//! let mut driver = Driver::new(config, MemoryDisplay::new(), ManualClock::new());
//!
//! driver.run_steps(&mut sim, 5).unwrap();
//! assert_eq!(sim.generation(), 5);
//! assert_eq!(driver.display().frames().count(), 5);
//! ```

pub mod clock;
pub mod driver;

pub use tui_life_core as core;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use clock::{Clock, ManualClock, ThreadClock};
pub use driver::Driver;
