//! The bundled demo datasets and the CLI commands for interacting with them.
use super::{RunOpts, handle_run_command};
use crate::settings::Settings;
use anyhow::{Context, Result, ensure};
use clap::Subcommand;
use include_dir::{Dir, DirEntry, include_dir};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The directory containing the demo datasets.
static DEMOS_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/demos");

/// The available subcommands for managing demo datasets.
#[derive(Subcommand)]
pub enum DemoSubcommands {
    /// List available demos.
    List,
    /// Provide information about the specified demo.
    Info {
        /// The name of the demo.
        name: String,
    },
    /// Extract a demo dataset to a new directory.
    Extract {
        /// The name of the demo to extract.
        name: String,
        /// The destination folder for the demo.
        new_path: Option<PathBuf>,
    },
    /// Run a demo.
    Run {
        /// The name of the demo to run.
        name: String,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
}

impl DemoSubcommands {
    /// Execute the supplied demo subcommand
    pub fn execute(self) -> Result<()> {
        match self {
            Self::List => handle_demo_list_command(),
            Self::Info { name } => handle_demo_info_command(&name)?,
            Self::Extract { name, new_path } => {
                handle_demo_extract_command(&name, new_path.as_deref())?;
            }
            Self::Run { name, opts } => handle_demo_run_command(&name, &opts, None)?,
        }

        Ok(())
    }
}

/// The names of the bundled demos
pub fn demo_names() -> impl Iterator<Item = &'static str> {
    DEMOS_DIR
        .dirs()
        .filter_map(|dir| dir.path().file_name())
        .filter_map(|name| name.to_str())
}

/// Handle the `demo list` command.
fn handle_demo_list_command() {
    for name in demo_names() {
        println!("{name}");
    }
}

/// Get the description of a demo from its README
fn demo_info(name: &str) -> Result<&'static str> {
    let path: PathBuf = [name, "README.txt"].iter().collect();
    DEMOS_DIR
        .get_file(path)
        .context("Demo not found.")?
        .contents_utf8()
        .context("README.txt is not UTF-8 encoded")
}

/// Handle the `demo info` command.
fn handle_demo_info_command(name: &str) -> Result<()> {
    println!("{}", demo_info(name)?);

    Ok(())
}

/// Handle the `demo extract` command
fn handle_demo_extract_command(name: &str, dest: Option<&Path>) -> Result<()> {
    let dest = dest.unwrap_or(Path::new(name));
    extract_demo(name, dest)
}

/// Extract the specified demo to a new directory
fn extract_demo(name: &str, new_path: &Path) -> Result<()> {
    let sub_dir = DEMOS_DIR.get_dir(name).context("Demo not found.")?;

    ensure!(
        !new_path.exists(),
        "Destination directory {} already exists",
        new_path.display()
    );

    copy_dir(sub_dir, new_path)
}

/// Copy the contents of an embedded directory, including time period subdirectories
fn copy_dir(dir: &Dir, dest: &Path) -> Result<()> {
    fs::create_dir(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    for entry in dir.entries() {
        let file_name = entry
            .path()
            .file_name()
            .context("Invalid path in demo directory")?;
        let entry_dest = dest.join(file_name);
        match entry {
            DirEntry::Dir(sub_dir) => copy_dir(sub_dir, &entry_dest)?,
            DirEntry::File(f) => fs::write(&entry_dest, f.contents())
                .with_context(|| format!("Failed to write {}", entry_dest.display()))?,
        }
    }

    Ok(())
}

/// Handle the `demo run` command.
///
/// The demo is extracted to a temporary directory, so unless `opts` gives an output folder,
/// results are written to `utilsim_results/<name>` in the working directory.
pub fn handle_demo_run_command(
    name: &str,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory.")?;
    let dataset_path = temp_dir.path().join(name);
    extract_demo(name, &dataset_path)?;
    handle_run_command(&dataset_path, opts, settings)
}
