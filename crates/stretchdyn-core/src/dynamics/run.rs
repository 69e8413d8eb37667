use super::progress::{Progress, ProgressReporter};
use crate::core::models::molecule::{Molecule, MoleculeError};
use nalgebra::{Point3, Vector3};
use tracing::{info, instrument, trace};

/// Final kinematic state of one atom after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomState {
    pub key: String,
    pub symbol: String,
    pub position: Point3<f64>,
    pub velocity: Vector3<f64>,
}

/// Outcome of a completed dynamics run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of integration steps taken.
    pub steps: u64,
    /// Per-atom final state, in the molecule's insertion order.
    pub final_state: Vec<AtomState>,
    /// Harmonic stretch energy stored in the bonds after the last step.
    pub stretch_energy: f64,
}

/// Advances the molecule through `steps` synchronous integration steps.
///
/// Each step evaluates every atom's acceleration from the pre-step positions
/// and then advances all atoms together; the caller observes positions,
/// velocities, and position histories on the molecule afterwards.
///
/// # Errors
///
/// Stops at the first failed step and propagates the underlying
/// [`MoleculeError`]; the molecule retains the state it reached before the
/// failure.
#[instrument(skip_all, name = "dynamics_run")]
pub fn run(
    molecule: &mut Molecule,
    steps: u64,
    reporter: &ProgressReporter,
) -> Result<RunSummary, MoleculeError> {
    info!(
        atoms = molecule.len(),
        steps, "starting bond-stretch dynamics run"
    );
    reporter.report(Progress::RunStart { total_steps: steps });

    for step in 0..steps {
        molecule.update_all_atoms()?;
        trace!(step, "integration step complete");
        reporter.report(Progress::StepComplete);
    }

    reporter.report(Progress::RunFinish);

    let final_state = molecule
        .atoms_iter()
        .map(|(key, atom)| AtomState {
            key: key.to_string(),
            symbol: atom.symbol.clone(),
            position: atom.position,
            velocity: atom.velocity,
        })
        .collect();
    let stretch_energy = molecule.total_stretch_energy()?;
    info!(stretch_energy, "dynamics run finished");

    Ok(RunSummary {
        steps,
        final_state,
        stretch_energy,
    })
}
