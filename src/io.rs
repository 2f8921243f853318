use std::path::PathBuf;

use thiserror::Error;

use crate::network::NetworkDefinition;
#[cfg(feature = "simulation")]
use crate::simulation::result::SimulationResult;

/// Loads and parses a network definition from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the JSON file containing the network definition
///
/// # Errors
///
/// This function will return an error if:
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents cannot be parsed as a network definition (`IOError::JsonParseError`)
pub fn load_network(path: impl Into<PathBuf>) -> Result<NetworkDefinition, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

/// Saves a simulation result to a JSON file.
///
/// # Arguments
///
/// * `path` - Path of the JSON file to create
/// * `result` - The simulation result to write
#[cfg(feature = "simulation")]
pub fn save_result(path: impl Into<PathBuf>, result: &SimulationResult) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, result).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur while reading network definitions or writing results.
#[derive(Error, Debug)]
pub enum IOError {
    /// The file could not be found, opened or created.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents could not be parsed or written as JSON.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
