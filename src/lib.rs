//! Turn-based race simulator for a mixed grid of road vehicles.
//!
//! The core is deliberately silent: [`race::Race`] mutates vehicles turn by
//! turn and accumulates histories and an event log, and the binary decides
//! what to print. All randomness flows through an injected [`rand::Rng`],
//! so a seeded generator replays the exact same race.

pub mod error;
pub mod garage;
pub mod race;
pub mod utils;
pub mod vehicle;
