use std::path::PathBuf;
use stretchdyn::core::io::topology::TopologyError;
use stretchdyn::core::models::bond::ForceError;
use stretchdyn::core::models::molecule::MoleculeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Dynamics(#[from] MoleculeError),

    #[error(transparent)]
    Force(#[from] ForceError),

    #[error("Failed to load topology: {0}")]
    Topology(#[from] TopologyError),

    #[error("Failed to write trajectory '{path}': {source}", path = path.display())]
    Trajectory {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
