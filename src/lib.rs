//! Simulation of water and electricity conservation scenarios across municipal zones.
#![warn(missing_docs)]
use std::path::PathBuf;

pub mod cli;
pub mod dataset;
pub mod id;
pub mod input;
pub mod log;
pub mod output;
pub mod scenario;
pub mod settings;
pub mod simulation;
pub mod units;
pub mod utility;
pub mod zone;

#[cfg(test)]
mod fixture;

/// Get the directory where the program settings are stored.
///
/// This is a `utilsim` subfolder of the platform's config directory, or of the working directory
/// if the platform has none.
pub fn get_utilsim_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("utilsim");

    path
}
