//! Quoter Clock Infrastructure
//!
//! Time sources used to judge quote expiration:
//!
//! - [`SystemClock`]: wall-clock time for production
//! - [`SimulationClock`]: frozen time that only moves when told to, for
//!   deterministic tests and replays
//!
//! ## Usage
//!
//! ```ignore
//! use quoter_clock::SimulationClock;
//! use chrono::Duration;
//!
//! let clock = SimulationClock::fixed();
//! clock.advance(Duration::minutes(5)); // Jump forward
//! ```

mod simulation;
mod system;

pub use simulation::SimulationClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use quoter_ports::Clock;
