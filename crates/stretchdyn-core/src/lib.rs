//! # StretchDyn Core Library
//!
//! A small library for simulating the classical stretch-vibration dynamics of
//! covalently bonded atoms, using a harmonic bond-stretch potential integrated
//! with the velocity-Verlet scheme.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Contains the molecular data model
//!   (`Molecule`, `Atom`, `Bond`), the pure mathematical form of the harmonic
//!   stretch potential (`potentials`), and I/O utilities for topology files
//!   and trajectory output.
//!
//! - **[`dynamics`]: The Driver.** The caller-facing simulation loop. It
//!   advances a `Molecule` through a fixed number of integration steps,
//!   reports progress through a callback interface, and summarizes the final
//!   kinematic state.
//!
//! The physics itself is deliberately narrow in scope: pairwise harmonic bond
//! stretch forces and single-particle velocity-Verlet integration. There are
//! no non-bonded terms, no angular or torsional terms, no periodic boundary
//! conditions, and no thermostats.

pub mod core;
pub mod dynamics;
