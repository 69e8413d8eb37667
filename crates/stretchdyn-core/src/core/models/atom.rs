use super::bond::{Bond, ForceError};
use super::ids::AtomId;
use nalgebra::{Point3, Vector3};
use slotmap::SlotMap;
use std::collections::BTreeMap;
use thiserror::Error;

/// The fixed integration time step, in femtoseconds.
///
/// The velocity-Verlet recurrence below is written against this unit step;
/// velocities are expressed in Å/fs and accelerations in Å/fs².
pub const DT_FS: f64 = 1.0;

#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot construct atom '{symbol}' with non-positive mass {mass_amu} amu")]
pub struct InvalidMassError {
    pub symbol: String,
    pub mass_amu: f64,
}

/// An atom participating in bond-stretch dynamics.
///
/// An `Atom` is the sole owner of its kinematic state: position, velocity,
/// and the acceleration retained from the previous integration step (required
/// by the velocity-Verlet recurrence). It also owns the map of directional
/// bonds incident on it, keyed by an arbitrary unique string that is
/// conventionally the bonded partner's key in the molecule.
///
/// The bond map and position history are initialized per instance; no state
/// is ever shared between atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element label, informational only; never read by the physics.
    pub symbol: String,
    /// Mass in atomic mass units. Always positive; enforced at construction.
    pub mass_amu: f64,
    /// Position in Angstroms.
    pub position: Point3<f64>,
    /// Velocity in Å/fs.
    pub velocity: Vector3<f64>,
    /// Acceleration computed during the previous integration step, in Å/fs².
    pub prev_accel: Vector3<f64>,
    /// Directional bonds incident on this atom. Each stored bond has this
    /// atom as `atom_b` and the bonded partner as `atom_a`; see
    /// [`Bond`](super::bond::Bond) for the sign conventions that follow.
    pub bonds: BTreeMap<String, Bond>,
    /// One position per completed integration step, appended after the state
    /// mutation. Never read by the physics; kept for trajectory inspection.
    pub position_history: Vec<Point3<f64>>,
}

impl Atom {
    /// Creates an atom at rest at `position`.
    ///
    /// Velocity and the carried acceleration start at zero, and the bond map
    /// and position history start empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMassError`] if `mass_amu` is zero or negative, since
    /// acceleration would be undefined.
    pub fn new(symbol: &str, mass_amu: f64, position: Point3<f64>) -> Result<Self, InvalidMassError> {
        if mass_amu <= 0.0 {
            return Err(InvalidMassError {
                symbol: symbol.to_string(),
                mass_amu,
            });
        }
        Ok(Self {
            symbol: symbol.to_string(),
            mass_amu,
            position,
            velocity: Vector3::zeros(),
            prev_accel: Vector3::zeros(),
            bonds: BTreeMap::new(),
            position_history: Vec::new(),
        })
    }

    /// The net physical force on this atom from all incident bonds, in
    /// amu·Å/fs².
    ///
    /// Each stored bond is oriented with the partner as `atom_a`, so its
    /// [`stretch_force`](Bond::stretch_force) is the force this atom exerts
    /// on the partner; by Newton's third law the force *on this atom* is its
    /// negation, summed over every incident bond.
    pub fn net_stretch_force(
        &self,
        atoms: &SlotMap<AtomId, Atom>,
    ) -> Result<Vector3<f64>, ForceError> {
        let mut net = Vector3::zeros();
        for bond in self.bonds.values() {
            net -= bond.stretch_force(atoms)?;
        }
        Ok(net)
    }

    /// The net acceleration of this atom, in Å/fs².
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::InvalidMass`] if the mass has been mutated to a
    /// non-positive value since construction.
    pub fn stretch_accel(&self, atoms: &SlotMap<AtomId, Atom>) -> Result<Vector3<f64>, ForceError> {
        if self.mass_amu <= 0.0 {
            return Err(ForceError::InvalidMass {
                symbol: self.symbol.clone(),
                mass_amu: self.mass_amu,
            });
        }
        Ok(self.net_stretch_force(atoms)? / self.mass_amu)
    }

    /// Advances position and velocity by one fixed time step of the
    /// velocity-Verlet scheme, given the acceleration freshly evaluated at
    /// the *current* (pre-step) position.
    ///
    /// The recurrence requires exactly one force evaluation per step: the
    /// half-step velocity uses the acceleration carried from the previous
    /// step, the position moves by that half-step velocity, and the velocity
    /// is then completed with `next_accel`, which is stored for the next
    /// call. Position is updated before velocity; callers must not reorder
    /// this.
    pub fn advance(&mut self, next_accel: Vector3<f64>) {
        let v_half = self.velocity + 0.5 * self.prev_accel * DT_FS;
        self.position += v_half * DT_FS;
        self.velocity = v_half + 0.5 * next_accel * DT_FS;
        self.prev_accel = next_accel;
        self.position_history.push(self.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn resting_atom(symbol: &str, mass_amu: f64, x: f64) -> Atom {
        Atom::new(symbol, mass_amu, Point3::new(x, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn new_atom_starts_at_rest_with_empty_collections() {
        let atom = resting_atom("Cl", 35.0, 0.0);
        assert_eq!(atom.symbol, "Cl");
        assert_eq!(atom.mass_amu, 35.0);
        assert_eq!(atom.velocity, Vector3::zeros());
        assert_eq!(atom.prev_accel, Vector3::zeros());
        assert!(atom.bonds.is_empty());
        assert!(atom.position_history.is_empty());
    }

    #[test]
    fn new_rejects_zero_and_negative_mass() {
        assert!(matches!(
            Atom::new("X", 0.0, Point3::origin()),
            Err(InvalidMassError { .. })
        ));
        let err = Atom::new("X", -1.0, Point3::origin()).unwrap_err();
        assert_eq!(err.symbol, "X");
        assert_eq!(err.mass_amu, -1.0);
    }

    #[test]
    fn collections_are_per_instance_never_shared() {
        let mut first = resting_atom("H", 1.0, 0.0);
        let second = resting_atom("H", 1.0, 1.0);

        let mut arena: SlotMap<AtomId, Atom> = SlotMap::with_key();
        let partner = arena.insert(resting_atom("Cl", 35.0, 2.0));
        let owner = arena.insert(resting_atom("H", 1.0, 0.0));
        first.bonds.insert("cl".into(), Bond::new(partner, owner, 1.27455, 4.88e-8));
        first.position_history.push(Point3::origin());

        assert_eq!(first.bonds.len(), 1);
        assert!(second.bonds.is_empty());
        assert!(second.position_history.is_empty());
    }

    #[test]
    fn advance_applies_the_verlet_recurrence_in_order() {
        let mut atom = resting_atom("H", 1.0, 0.0);
        atom.velocity = Vector3::new(1.0, 0.0, 0.0);
        atom.prev_accel = Vector3::new(0.25, 0.0, 0.0);

        let next_accel = Vector3::new(-0.5, 0.0, 0.0);
        atom.advance(next_accel);

        // v_half = 1.0 + 0.5 * 0.25 = 1.125; pos = 0.0 + 1.125;
        // vel = 1.125 - 0.25 = 0.875 (all dyadic, so the equalities are exact)
        assert_eq!(atom.position, Point3::new(1.125, 0.0, 0.0));
        assert_eq!(atom.velocity, Vector3::new(0.875, 0.0, 0.0));
        assert_eq!(atom.prev_accel, next_accel);
    }

    #[test]
    fn advance_with_zero_acceleration_is_uniform_motion() {
        let mut atom = resting_atom("H", 1.0, 0.0);
        atom.velocity = Vector3::new(0.5, -0.25, 0.0);

        atom.advance(Vector3::zeros());
        atom.advance(Vector3::zeros());

        assert_eq!(atom.position, Point3::new(1.0, -0.5, 0.0));
        assert_eq!(atom.velocity, Vector3::new(0.5, -0.25, 0.0));
    }

    #[test]
    fn position_history_records_post_step_positions_only() {
        let mut atom = resting_atom("H", 1.0, 0.0);
        atom.velocity = Vector3::new(1.0, 0.0, 0.0);

        assert!(atom.position_history.is_empty());
        atom.advance(Vector3::zeros());
        atom.advance(Vector3::zeros());
        atom.advance(Vector3::zeros());

        assert_eq!(atom.position_history.len(), 3);
        // The first entry is the position after the first step, not the
        // initial position.
        assert_eq!(atom.position_history[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(atom.position_history[2], atom.position);
    }

    #[test]
    fn net_stretch_force_is_zero_with_no_bonds() {
        let arena: SlotMap<AtomId, Atom> = SlotMap::with_key();
        let atom = resting_atom("He", 4.0026, 0.0);
        assert_eq!(atom.net_stretch_force(&arena).unwrap(), Vector3::zeros());
    }

    #[test]
    fn net_stretch_force_restores_a_displaced_atom() {
        let mut arena: SlotMap<AtomId, Atom> = SlotMap::with_key();
        let cl = arena.insert(resting_atom("Cl", 35.0, 0.0));
        let h = arena.insert(resting_atom("H", 1.0, 1.3));

        // Stored on H: the bond whose atom_a is the partner (Cl).
        arena[h]
            .bonds
            .insert("cl".into(), Bond::new(cl, h, 1.27455, 4.88e-8));

        let net = arena[h].net_stretch_force(&arena).unwrap();
        assert!(net.x < 0.0, "stretched H must be pulled back toward Cl");
        assert_eq!(net.y, 0.0);
        assert_eq!(net.z, 0.0);
    }

    #[test]
    fn stretch_accel_divides_net_force_by_mass() {
        let mut arena: SlotMap<AtomId, Atom> = SlotMap::with_key();
        let cl = arena.insert(resting_atom("Cl", 35.0, 0.0));
        let h = arena.insert(resting_atom("H", 2.0, 1.3));
        arena[h]
            .bonds
            .insert("cl".into(), Bond::new(cl, h, 1.27455, 4.88e-8));

        let net = arena[h].net_stretch_force(&arena).unwrap();
        let accel = arena[h].stretch_accel(&arena).unwrap();
        assert_eq!(accel, net / 2.0);
    }

    #[test]
    fn stretch_accel_rejects_mass_mutated_to_zero() {
        let mut arena: SlotMap<AtomId, Atom> = SlotMap::with_key();
        let h = arena.insert(resting_atom("H", 1.0, 0.0));
        arena[h].mass_amu = 0.0;

        assert!(matches!(
            arena[h].stretch_accel(&arena),
            Err(ForceError::InvalidMass { .. })
        ));
    }
}
