use super::atom::Atom;
use super::bond::{Bond, ForceError};
use super::ids::AtomId;
use slotmap::SlotMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error(transparent)]
    Force(#[from] ForceError),

    #[error("no atom with key '{0}' in the molecule")]
    UnknownAtom(String),

    #[error("an atom with key '{0}' already exists in the molecule")]
    DuplicateAtom(String),

    #[error("cannot bond atom '{0}' to itself")]
    SelfBond(String),
}

/// A named collection of atoms advanced through time as one unit.
///
/// The molecule owns every atom in an arena; atoms are addressed either by
/// their stable [`AtomId`] handle or by the unique string key given at
/// insertion. Topology is fixed after construction: atoms and bonds are added
/// while wiring the system and never removed, and stepping only mutates
/// kinematic state.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Lookup map from atom key to arena handle.
    index: HashMap<String, AtomId>,
    /// Atom keys and handles in insertion order, for deterministic iteration.
    entries: Vec<(String, AtomId)>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an atom under a unique key and returns its arena handle.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::DuplicateAtom`] if the key is already taken.
    pub fn add_atom(&mut self, key: &str, atom: Atom) -> Result<AtomId, MoleculeError> {
        if self.index.contains_key(key) {
            return Err(MoleculeError::DuplicateAtom(key.to_string()));
        }
        let id = self.atoms.insert(atom);
        self.index.insert(key.to_string(), id);
        self.entries.push((key.to_string(), id));
        Ok(id)
    }

    /// Registers on `owner` the directional bond toward `partner`.
    ///
    /// The entry lands in the owner's bond map under the partner's key, wired
    /// with the partner as `atom_a` and the owner as `atom_b` (the
    /// convention [`Atom::net_stretch_force`] relies on). A physical bond
    /// needs both directions; see [`Molecule::add_bond_pair`].
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::UnknownAtom`] if either key is absent and
    /// [`MoleculeError::SelfBond`] if the two keys name the same atom.
    pub fn add_bond(
        &mut self,
        owner: &str,
        partner: &str,
        r_e_ab: f64,
        k_ab: f64,
    ) -> Result<(), MoleculeError> {
        let owner_id = self.lookup(owner)?;
        let partner_id = self.lookup(partner)?;
        if owner_id == partner_id {
            return Err(MoleculeError::SelfBond(owner.to_string()));
        }
        let bond = Bond::new(partner_id, owner_id, r_e_ab, k_ab);
        self.atoms[owner_id].bonds.insert(partner.to_string(), bond);
        Ok(())
    }

    /// Wires both directional bonds of one physical bond between `a` and `b`.
    pub fn add_bond_pair(
        &mut self,
        a: &str,
        b: &str,
        r_e_ab: f64,
        k_ab: f64,
    ) -> Result<(), MoleculeError> {
        self.add_bond(a, b, r_e_ab, k_ab)?;
        self.add_bond(b, a, r_e_ab, k_ab)
    }

    pub fn atom_id(&self, key: &str) -> Option<AtomId> {
        self.index.get(key).copied()
    }

    pub fn atom(&self, key: &str) -> Option<&Atom> {
        self.index.get(key).map(|&id| &self.atoms[id])
    }

    pub fn atom_mut(&mut self, key: &str) -> Option<&mut Atom> {
        let id = *self.index.get(key)?;
        Some(&mut self.atoms[id])
    }

    /// The atom arena, as required by the read-only [`Bond`] operations.
    pub fn atoms(&self) -> &SlotMap<AtomId, Atom> {
        &self.atoms
    }

    /// Iterates atoms in insertion order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (&str, &Atom)> {
        self.entries
            .iter()
            .map(|(key, id)| (key.as_str(), &self.atoms[*id]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advances a single atom one integration step using the positions of
    /// all atoms as they stand at the moment of the call.
    ///
    /// When bonded atoms are stepped one at a time through this method, a
    /// later call observes positions already advanced by an earlier one; use
    /// [`Molecule::update_all_atoms`] for the synchronous whole-molecule
    /// step.
    pub fn update_pos_vel(&mut self, key: &str) -> Result<(), MoleculeError> {
        let id = self.lookup(key)?;
        let next_accel = self.atoms[id].stretch_accel(&self.atoms)?;
        self.atoms[id].advance(next_accel);
        Ok(())
    }

    /// Advances every atom one integration step, synchronously.
    ///
    /// All accelerations are evaluated from the pre-step positions before
    /// any atom moves, so the result is independent of atom insertion or
    /// iteration order and exactly symmetric between bonded partners. This
    /// differs from stepping each atom in turn via
    /// [`Molecule::update_pos_vel`], where the second atom of a bonded pair
    /// would see its partner's already-advanced position.
    pub fn update_all_atoms(&mut self) -> Result<(), MoleculeError> {
        let mut accels = Vec::with_capacity(self.entries.len());
        for &(_, id) in &self.entries {
            accels.push((id, self.atoms[id].stretch_accel(&self.atoms)?));
        }
        for (id, accel) in accels {
            self.atoms[id].advance(accel);
        }
        Ok(())
    }

    /// The total harmonic stretch energy stored in the molecule's bonds.
    ///
    /// Each physical bond is represented by two directional entries with
    /// identical constants, so the directional sum is halved.
    pub fn total_stretch_energy(&self) -> Result<f64, MoleculeError> {
        let mut directional_sum = 0.0;
        for &(_, id) in &self.entries {
            for bond in self.atoms[id].bonds.values() {
                directional_sum += bond.stretch_energy(&self.atoms)?;
            }
        }
        Ok(directional_sum / 2.0)
    }

    fn lookup(&self, key: &str) -> Result<AtomId, MoleculeError> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| MoleculeError::UnknownAtom(key.to_string()))
    }
}
