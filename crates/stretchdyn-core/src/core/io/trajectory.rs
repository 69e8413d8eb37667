use crate::core::models::molecule::Molecule;
use std::io::Write;

/// Writes every atom's recorded position history as CSV.
///
/// Rows are `step,atom,x,y,z`, step-major, atoms in the molecule's insertion
/// order, one row per atom per completed integration step. Step numbering
/// starts at 1, matching the convention that the first history entry is the
/// position *after* the first step.
pub fn write_trajectory<W: Write>(writer: W, molecule: &Molecule) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["step", "atom", "x", "y", "z"])?;

    let steps = molecule
        .atoms_iter()
        .map(|(_, atom)| atom.position_history.len())
        .max()
        .unwrap_or(0);

    for step in 0..steps {
        for (key, atom) in molecule.atoms_iter() {
            if let Some(position) = atom.position_history.get(step) {
                csv_writer.serialize((
                    step as u64 + 1,
                    key,
                    position.x,
                    position.y,
                    position.z,
                ))?;
            }
        }
    }
    csv_writer.flush()?;
    Ok(())
}
