use crate::cli::CheckArgs;
use crate::error::Result;
use stretchdyn::core::io::topology;
use tracing::info;

/// Loads a topology and reports its atoms, bond wiring, and the forces the
/// current configuration produces, without advancing time.
pub fn execute(args: CheckArgs) -> Result<()> {
    info!("Checking topology {:?}", &args.input);
    let molecule = topology::load_molecule(&args.input)?;

    println!("Topology OK: {} atom(s).", molecule.len());
    for (key, atom) in molecule.atoms_iter() {
        let net_force = atom.net_stretch_force(molecule.atoms())?;
        println!(
            "{:<8} {:<6} {:>10.4} amu  {} bond(s)  net force ({:.3e}, {:.3e}, {:.3e})",
            key,
            atom.symbol,
            atom.mass_amu,
            atom.bonds.len(),
            net_force.x,
            net_force.y,
            net_force.z,
        );
    }
    println!(
        "Total stretch energy: {:.6e}",
        molecule.total_stretch_energy()?
    );

    Ok(())
}
