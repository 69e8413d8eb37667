//! Provides input/output functionality around the molecular model.
//!
//! This module contains the TOML topology format used to assemble a
//! [`Molecule`](crate::core::models::molecule::Molecule) from a file, a
//! static table of standard atomic masses for defaulting, and a CSV writer
//! for recorded position histories. The physics never reads any of this
//! back; it exists for the callers that own the simulation loop.

pub mod elements;
pub mod topology;
pub mod trajectory;
