//! Discrete events and periodic scheduling.
//!
//! Provides the event data types registered on a system and the pure
//! next-event arithmetic used by scheduling queries.

mod periodic;
pub mod schedule;

pub use periodic::*;
pub use schedule::{next_sample_time, next_update_time};
