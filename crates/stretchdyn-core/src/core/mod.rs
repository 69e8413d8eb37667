//! # Core Module
//!
//! The fundamental building blocks for bond-stretch molecular dynamics: the
//! molecular data model, the harmonic force field, and file I/O.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, directional bonds, and
//!   the molecule that owns them
//! - **Force Calculations** ([`forcefield`]) - The harmonic stretch potential
//!   and its derivative
//! - **File I/O** ([`io`]) - TOML topology loading and CSV trajectory output

pub mod forcefield;
pub mod io;
pub mod models;
