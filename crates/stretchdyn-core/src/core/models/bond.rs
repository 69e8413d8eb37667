use super::atom::Atom;
use super::ids::AtomId;
use crate::core::forcefield::potentials;
use nalgebra::Vector3;
use slotmap::SlotMap;
use thiserror::Error;

/// Errors arising while evaluating bond forces or accelerations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForceError {
    /// The two bonded atoms occupy the identical position, so the bond
    /// direction is undefined. This indicates a physically nonsensical
    /// configuration and is not recoverable.
    #[error("atoms '{atom_a}' and '{atom_b}' coincide; bond direction is undefined")]
    DegenerateGeometry { atom_a: String, atom_b: String },

    /// A bond endpoint does not resolve to an atom in the molecule. This is
    /// a wiring bug in the caller's setup code.
    #[error("bond references atom {0:?} which is not present in the molecule")]
    MissingAtom(AtomId),

    /// An atom's mass is zero or negative, making its acceleration
    /// undefined. Construction rejects such masses, so seeing this means the
    /// mass was mutated after the fact.
    #[error("atom '{symbol}' has non-positive mass {mass_amu} amu")]
    InvalidMass { symbol: String, mass_amu: f64 },
}

/// A directional harmonic bond between two atoms.
///
/// A `Bond` holds no mutable state of its own: every quantity is recomputed
/// on demand from the current positions of its two endpoint atoms, so results
/// can never be stale. The endpoints are [`AtomId`] handles into the arena
/// owned by the molecule; the bond owns neither atom.
///
/// Each physical bond in a molecule is represented as *two* independent
/// `Bond` instances, one held by each endpoint atom with `atom_a`/`atom_b`
/// swapped. The bond stored in an atom's own map has that atom as `atom_b`
/// and the bonded partner as `atom_a`, so [`Bond::stretch_force`] yields the
/// force the owning atom exerts *on its partner*; the owning atom's net force
/// is recovered by negation (see
/// [`Atom::net_stretch_force`](super::atom::Atom::net_stretch_force)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// Endpoint toward which the displacement vector points.
    pub atom_a: AtomId,
    /// Endpoint the displacement vector points away from.
    pub atom_b: AtomId,
    /// Equilibrium bond length in Angstroms.
    pub r_e_ab: f64,
    /// Harmonic force constant in amu·Å²/fs² per Å².
    pub k_ab: f64,
}

impl Bond {
    pub fn new(atom_a: AtomId, atom_b: AtomId, r_e_ab: f64, k_ab: f64) -> Self {
        Self {
            atom_a,
            atom_b,
            r_e_ab,
            k_ab,
        }
    }

    /// The displacement vector from `atom_b` to `atom_a`, in Angstroms.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::MissingAtom`] if either endpoint handle does not
    /// resolve in the arena.
    pub fn displacement(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<Vector3<f64>, ForceError> {
        let a = atoms
            .get(self.atom_a)
            .ok_or(ForceError::MissingAtom(self.atom_a))?;
        let b = atoms
            .get(self.atom_b)
            .ok_or(ForceError::MissingAtom(self.atom_b))?;
        Ok(a.position - b.position)
    }

    /// The current bond length, in Angstroms.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::DegenerateGeometry`] if the two atoms coincide
    /// exactly, since the bond direction is then undefined.
    pub fn length(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<f64, ForceError> {
        let len = self.displacement(atoms)?.norm();
        if len == 0.0 {
            return Err(self.degenerate_geometry(atoms));
        }
        Ok(len)
    }

    /// The unit vector pointing from `atom_b` toward `atom_a`.
    pub fn unit_vector(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<Vector3<f64>, ForceError> {
        Ok(self.displacement(atoms)? / self.length(atoms)?)
    }

    /// The harmonic stretch energy currently stored in the bond.
    pub fn stretch_energy(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<f64, ForceError> {
        Ok(potentials::harmonic_stretch(
            self.length(atoms)?,
            self.r_e_ab,
            self.k_ab,
        ))
    }

    /// The derivative of the stretch energy with respect to bond length:
    /// the one-dimensional restoring-force magnitude along the bond axis.
    /// Positive when the bond is stretched beyond equilibrium, negative when
    /// compressed.
    pub fn stretch_derivative(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<f64, ForceError> {
        Ok(potentials::harmonic_stretch_derivative(
            self.length(atoms)?,
            self.r_e_ab,
            self.k_ab,
        ))
    }

    /// The restoring force exerted on `atom_a` by `atom_b`, pulling `atom_a`
    /// back toward equilibrium separation.
    pub fn stretch_force(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<Vector3<f64>, ForceError> {
        Ok(-self.stretch_derivative(atoms)? * self.unit_vector(atoms)?)
    }

    fn degenerate_geometry(&self, atoms: &SlotMap<AtomId, Atom>) -> ForceError {
        let symbol = |id: AtomId| {
            atoms
                .get(id)
                .map(|atom| atom.symbol.clone())
                .unwrap_or_default()
        };
        ForceError::DegenerateGeometry {
            atom_a: symbol(self.atom_a),
            atom_b: symbol(self.atom_b),
        }
    }
}
