//! Background Tasks Module
//!
//! Tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Periodic sweep: removes expired and excess entries every TTL interval

mod sweeper;

pub use sweeper::spawn_sweep_task;
