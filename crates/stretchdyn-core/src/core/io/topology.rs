use super::elements::element_mass;
use crate::core::models::atom::{Atom, InvalidMassError};
use crate::core::models::molecule::{Molecule, MoleculeError};
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("atom '{key}' has no mass and element '{symbol}' is not in the mass table")]
    UnknownElement { key: String, symbol: String },
    #[error(transparent)]
    InvalidMass(#[from] InvalidMassError),
    #[error(transparent)]
    Molecule(#[from] MoleculeError),
}

/// One atom entry of a topology file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AtomSpec {
    /// Unique key the atom is addressed by within the molecule.
    pub key: String,
    /// Element symbol, also used to default the mass.
    pub symbol: String,
    /// Mass override in amu; defaults from the element table when omitted.
    pub mass_amu: Option<f64>,
    /// Initial position in Angstroms.
    pub position: [f64; 3],
    /// Initial velocity in Å/fs; defaults to rest.
    pub velocity: Option<[f64; 3]>,
}

/// One physical bond entry of a topology file; wired directionally both ways.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BondSpec {
    pub atom_a: String,
    pub atom_b: String,
    /// Equilibrium bond length in Angstroms.
    pub r_e_ab: f64,
    /// Harmonic force constant.
    pub k_ab: f64,
}

/// A molecular topology as written in a TOML file.
///
/// ```toml
/// [[atom]]
/// key = "cl"
/// symbol = "Cl"
/// position = [0.0, 0.0, 0.0]
///
/// [[atom]]
/// key = "h"
/// symbol = "H"
/// position = [1.27455, 0.0, 0.0]
///
/// [[bond]]
/// atom-a = "h"
/// atom-b = "cl"
/// r-e-ab = 1.27455
/// k-ab = 4.88e-8
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MoleculeFile {
    #[serde(rename = "atom")]
    pub atoms: Vec<AtomSpec>,
    #[serde(rename = "bond", default)]
    pub bonds: Vec<BondSpec>,
}

impl MoleculeFile {
    pub fn load(path: &Path) -> Result<Self, TopologyError> {
        let content = std::fs::read_to_string(path).map_err(|e| TopologyError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| TopologyError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Assembles the molecule this file describes.
    ///
    /// Atoms are created in file order; each bond entry is wired as the two
    /// directional bonds the force model expects. Masses omitted in the file
    /// default from [`element_mass`].
    pub fn into_molecule(self) -> Result<Molecule, TopologyError> {
        let mut molecule = Molecule::new();
        for spec in &self.atoms {
            let mass_amu = match spec.mass_amu {
                Some(mass) => mass,
                None => element_mass(&spec.symbol).ok_or_else(|| TopologyError::UnknownElement {
                    key: spec.key.clone(),
                    symbol: spec.symbol.clone(),
                })?,
            };
            let [x, y, z] = spec.position;
            let mut atom = Atom::new(&spec.symbol, mass_amu, Point3::new(x, y, z))?;
            if let Some([vx, vy, vz]) = spec.velocity {
                atom.velocity = Vector3::new(vx, vy, vz);
            }
            molecule.add_atom(&spec.key, atom)?;
        }
        for bond in &self.bonds {
            molecule.add_bond_pair(&bond.atom_a, &bond.atom_b, bond.r_e_ab, bond.k_ab)?;
        }
        Ok(molecule)
    }
}

/// Loads and assembles a molecule from a TOML topology file.
pub fn load_molecule(path: &Path) -> Result<Molecule, TopologyError> {
    MoleculeFile::load(path)?.into_molecule()
}
