use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use stretchdyn::core::io::topology;
use stretchdyn::core::io::trajectory::write_trajectory;
use stretchdyn::dynamics::progress::ProgressReporter;
use stretchdyn::dynamics::run::run;
use tracing::info;

pub fn execute(args: RunArgs) -> Result<()> {
    info!("Loading topology from {:?}", &args.input);
    let mut molecule = topology::load_molecule(&args.input)?;
    info!(
        "Loaded {} atom(s); starting {} integration step(s).",
        molecule.len(),
        args.steps
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let summary = run(&mut molecule, args.steps, &reporter)?;

    println!(
        "Completed {} integration step(s) of {} atom(s).",
        summary.steps,
        summary.final_state.len()
    );
    println!("Residual stretch energy: {:.6e}", summary.stretch_energy);
    println!("{:<8} {:<6} {:>34} {:>34}", "atom", "symbol", "position (Å)", "velocity (Å/fs)");
    for state in &summary.final_state {
        println!(
            "{:<8} {:<6} {:>34} {:>34}",
            state.key,
            state.symbol,
            format_triplet(state.position.x, state.position.y, state.position.z),
            format_triplet(state.velocity.x, state.velocity.y, state.velocity.z),
        );
    }

    if let Some(path) = &args.trajectory {
        let file = std::fs::File::create(path)?;
        write_trajectory(file, &molecule).map_err(|e| CliError::Trajectory {
            path: path.clone(),
            source: e,
        })?;
        println!("Trajectory written to {}", path.display());
    }

    Ok(())
}

fn format_triplet(x: f64, y: f64, z: f64) -> String {
    format!("({x:.6}, {y:.6}, {z:.6})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const HCL_TOPOLOGY: &str = r#"
[[atom]]
key = "cl"
symbol = "Cl"
mass-amu = 35.0
position = [0.0, 0.0, 0.0]

[[atom]]
key = "h"
symbol = "H"
mass-amu = 1.0
position = [1.3, 0.0, 0.0]

[[bond]]
atom-a = "h"
atom-b = "cl"
r-e-ab = 1.27455
k-ab = 4.88e-8
"#;

    fn write_topology(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("hcl.toml");
        std::fs::write(&path, HCL_TOPOLOGY).unwrap();
        path
    }

    #[test]
    fn execute_runs_and_writes_a_trajectory() {
        let dir = tempfile::tempdir().unwrap();
        let trajectory_path = dir.path().join("out.csv");
        let args = RunArgs {
            input: write_topology(&dir),
            steps: 10,
            trajectory: Some(trajectory_path.clone()),
        };

        execute(args).unwrap();

        let csv = std::fs::read_to_string(trajectory_path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("step,atom,x,y,z"));
        assert_eq!(lines.count(), 10 * 2);
    }

    #[test]
    fn execute_without_trajectory_writes_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = RunArgs {
            input: write_topology(&dir),
            steps: 2,
            trajectory: None,
        };

        execute(args).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn execute_fails_cleanly_on_missing_input() {
        let args = RunArgs {
            input: PathBuf::from("/nonexistent/hcl.toml"),
            steps: 1,
            trajectory: None,
        };
        assert!(matches!(execute(args), Err(CliError::Topology(_))));
    }

    #[test]
    fn format_triplet_is_fixed_precision() {
        assert_eq!(format_triplet(1.0, -0.5, 0.0), "(1.000000, -0.500000, 0.000000)");
    }
}
