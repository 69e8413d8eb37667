//! # Core Models Module
//!
//! Data structures representing a molecular system for stretch dynamics.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom state: mass, position, velocity, and the
//!   acceleration carried between integration steps
//! - [`bond`] - Directional harmonic bond between two atoms, evaluated on
//!   demand from current positions
//! - [`molecule`] - The owning collection of atoms, keyed by name, with the
//!   synchronous integration step over all of them
//! - [`ids`] - Arena key types for atoms
//!
//! Atoms are stored in an arena owned by the [`molecule::Molecule`]; bonds
//! hold lightweight [`ids::AtomId`] handles rather than owning references, so
//! the pair of directional bonds between two atoms never forms an ownership
//! cycle.

pub mod atom;
pub mod bond;
pub mod ids;
pub mod molecule;
