//! Hagelin M-209 Converter Core
//!
//! Bit-exact simulation of the M-209 mechanical cipher machine together
//! with the Army standard operating procedure for framing messages.
//!
//! # Design
//!
//! All machine state lives in [`Converter`], which owns six [`KeyWheel`]s
//! and one [`Drum`]. Operations are synchronous and deterministic; every
//! randomized step (wheel positions, message indicators) draws from a
//! caller-supplied `rand::Rng`, enabling:
//!
//! - Deterministic testing with seeded RNG
//! - No process-global randomness in library code
//!
//! Configuration setters are atomic: a rejected call leaves the machine
//! exactly as it was.
//!
//! # Layers
//!
//! - [`wheel`] / [`drum`]: the mechanical parts
//! - [`converter`]: the assembled machine and its reciprocal cipher step
//! - [`keylist`]: the named configuration record
//! - [`procedure`]: indicator derivation and message framing

pub mod converter;
pub mod drum;
pub mod keylist;
pub mod procedure;
pub mod wheel;

pub use converter::{Converter, ConverterError};
pub use drum::{BAR_COUNT, Bar, Drum, DrumError};
pub use keylist::KeyList;
pub use procedure::{MessageOptions, ParsedMessage, Procedure, ProcedureError};
pub use wheel::{KeyWheel, TOTAL_PINS, WHEEL_ALPHABETS, WHEEL_COUNT, WheelError};
