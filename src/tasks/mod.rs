//! Background Tasks Module
//!
//! Houses the expiry sweep that keeps the in-memory backend ephemeral.

mod sweep;

pub use sweep::spawn_sweep_task;
