//! The command line interface for utilsim.
use crate::input::load_dataset;
use crate::log;
use crate::output::report::{ReportData, try_write_report};
use crate::output::{REPORT_FILE_NAME, create_output_directory, get_output_dir, write_results};
use crate::scenario::SimulationSettings;
use crate::settings::Settings;
use crate::simulation::{self, SimulationResults, series::current_month_index};
use crate::utility::UtilityType;
use ::log::{info, warn};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

pub mod demo;
use demo::DemoSubcommands;
pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for utilsim.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the run command
#[derive(Args, Default)]
pub struct RunOpts {
    /// Directory for output files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
    /// Whether to overwrite the output directory if it already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the scenario for a dataset and write the results.
    Run {
        /// Path to the dataset directory.
        dataset_dir: PathBuf,
        /// Other run options
        #[command(flatten)]
        opts: RunOpts,
    },
    /// Validate a dataset and its scenario.
    Validate {
        /// The path to the dataset directory.
        dataset_dir: PathBuf,
    },
    /// Manage the bundled demo datasets.
    Demo {
        /// The available subcommands for managing demo datasets.
        #[command(subcommand)]
        subcommand: DemoSubcommands,
    },
    /// Manage the program settings file.
    Settings {
        /// The subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { dataset_dir, opts } => handle_run_command(&dataset_dir, &opts, None),
            Self::Validate { dataset_dir } => handle_validate_command(&dataset_dir, None),
            Self::Demo { subcommand } => subcommand.execute(),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start utilsim
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ utilsim --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load program settings, if not provided
fn load_settings(settings: Option<Settings>) -> Result<Settings> {
    match settings {
        Some(settings) => Ok(settings),
        None => Settings::load().context("Failed to load settings."),
    }
}

/// Handle the `run` command.
pub fn handle_run_command(
    dataset_path: &Path,
    opts: &RunOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = load_settings(settings)?;

    // Get path to output folder
    let pathbuf: PathBuf;
    let output_path = if let Some(p) = opts.output_dir.as_deref() {
        p
    } else {
        pathbuf = get_output_dir(dataset_path)?;
        &pathbuf
    };

    // The command-line flag can only enable overwriting, not disable it
    let allow_overwrite = opts.overwrite || settings.overwrite;
    let overwrite = create_output_directory(output_path, allow_overwrite).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_path.display()
        )
    })?;

    log::init(&settings.log_level, Some(output_path))
        .context("Failed to initialise logging.")?;

    let (dataset, scenario) = load_dataset(dataset_path).context("Failed to load dataset.")?;
    info!("Loaded dataset from {}", dataset_path.display());
    info!("Output folder: {}", output_path.display());

    // NB: We have to wait until the logger is initialised to display this warning
    if overwrite {
        warn!("Output folder will be overwritten");
    }

    let results = simulation::run(&dataset, &scenario, current_month_index());
    log_results(&results, &scenario);

    let today = Local::now().date_naive();
    write_results(output_path, dataset_path, &scenario, &results, today)?;

    // A failed report doesn't fail the run
    try_write_report(
        &output_path.join(REPORT_FILE_NAME),
        &ReportData {
            results: &results,
            settings: &scenario,
            generated_on: today,
        },
    );

    info!("Simulation complete!");

    Ok(())
}

/// Log headline figures for a scenario run
fn log_results(results: &SimulationResults, scenario: &SimulationSettings) {
    let scores = &results.scores;
    info!(
        "Sustainability scores: overall {}%, water {}%, electricity {}%",
        scores.overall, scores.water, scores.electricity
    );

    if !scenario.simulation_enabled {
        info!("Simulation disabled: showing base consumption");
        return;
    }

    for utility in UtilityType::iter() {
        let savings = results.savings(utility);
        if savings.is_defined() {
            info!(
                "{} savings: {} ({}%)",
                utility.title(),
                savings.savings.value(),
                savings.percent
            );
        } else {
            warn!(
                "{} savings percentage is undefined as base consumption is zero",
                utility.title()
            );
        }
    }
}

/// Handle the `validate` command.
pub fn handle_validate_command(dataset_path: &Path, settings: Option<Settings>) -> Result<()> {
    let settings = load_settings(settings)?;

    // We don't save log files when running the validate command
    log::init(&settings.log_level, None).context("Failed to initialise logging.")?;

    let (dataset, _) = load_dataset(dataset_path).context("Failed to validate dataset.")?;
    info!(
        "Dataset validation successful! Found {} water zones and {} electricity zones",
        dataset.water.len(),
        dataset.electricity.len()
    );

    Ok(())
}
