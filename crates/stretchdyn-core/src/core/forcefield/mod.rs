//! # Force Field Module
//!
//! The mathematical form of the bond-stretch force field.
//!
//! The only interaction modeled is the harmonic stretch potential
//! `E = (k/2)(r - r_e)^2` between two bonded atoms. The pure scalar functions
//! live in [`potentials`]; the vector quantities derived from them (bond
//! displacement, restoring force) are exposed as read-only operations on
//! [`crate::core::models::bond::Bond`].

pub mod potentials;
