//! # Dynamics Module
//!
//! The caller-facing simulation driver. [`run::run`] advances a
//! [`Molecule`](crate::core::models::molecule::Molecule) through a fixed
//! number of synchronous velocity-Verlet steps, emitting progress events for
//! interactive front-ends and returning a summary of the final kinematic
//! state.

pub mod progress;
pub mod run;
