//! Unit movement along computed paths.
//!
//! - [`MovementDriver`] retires world-space waypoints one tick at a time.
//! - [`Mover`] is the seam to the host's motion system; [`KinematicBody`]
//!   is a constant-speed stand-in.
//! - [`UnitSession`] ties selection, highlighting, path search and the
//!   driver together behind an explicit [`UnitMode`].

mod driver;
mod mover;
mod session;

pub use driver::{Advance, DEFAULT_ARRIVAL_THRESHOLD, MovementDriver};
pub use mover::{KinematicBody, Mover};
pub use session::{Command, UnitMode, UnitSession};
