//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Cache sweep: removes entries older than the cache interval once per tick

mod sweep;

pub use sweep::spawn_sweep_task;
