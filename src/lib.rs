//! Template models for read simulation.
//!
//! Summarizes the unpaired and paired templates observed in an alignment set
//! and draws templates from them so that simulated reads and fragments follow
//! the same length profile.

pub mod cli;
pub mod generator;
pub mod io;
pub mod models;
pub mod random;
pub mod templates;
