//! CLI Adapter.

use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{Parser, Subcommand, ValueEnum};

use crate::app::api::{self, AddOptions, CreateOptions};
use crate::app::{Reporter, Verbosity, logging};
use crate::domain::{AppError, ScriptCategory};

#[derive(Parser)]
#[command(name = "suitegen")]
#[command(version)]
#[command(about = "Scaffold SuiteCloud projects and SuiteScript files", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a SuiteCloud account customization project
    #[clap(visible_alias = "c")]
    Create {
        /// Project name
        #[arg(short, long)]
        name: Option<String>,
        /// Skip `suitecloud account:setup`
        #[arg(short, long)]
        skip_setup: bool,
        /// Directory to create the project in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Add a SuiteScript file and its object definition
    #[clap(visible_alias = "a")]
    Add {
        /// Script type
        #[arg(value_enum, ignore_case = true)]
        category: ScriptCategory,
        /// Script name (prompted for when omitted)
        name: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let reporter = Reporter::new(Verbosity::from_flags(cli.verbose, cli.quiet));
    logging::init(reporter.verbosity());

    let (result, cancelled_message) = match cli.command {
        Commands::Create { name, skip_setup, output } => (
            run_create(CreateOptions { name, skip_setup, output }, reporter),
            "Cancelled. Project not created.",
        ),
        Commands::Add { category, name } => {
            (run_add(AddOptions::new(category, name), reporter), "Cancelled. Script not created.")
        }
    };

    match result {
        Ok(()) => {}
        Err(AppError::UserCancelled) => {
            reporter.info(cancelled_message);
            std::process::exit(AppError::UserCancelled.exit_code());
        }
        Err(e) => {
            reporter.error(&e);
            if let AppError::ToolNotInstalled(_) = e {
                reporter.error("Install it with: npm install -g @oracle/suitecloud-cli");
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn run_create(options: CreateOptions, reporter: Reporter) -> Result<(), AppError> {
    api::create_project(options, reporter)?;
    Ok(())
}

fn run_add(options: AddOptions, reporter: Reporter) -> Result<(), AppError> {
    let category = options.category;
    let outcome = api::add_script(options, reporter)?;

    reporter.success(format!("{category} script created"));
    reporter.detail(format!("Script ID: customscript_{}", outcome.script_id));
    reporter.detail(format!("Deployment ID: {}", outcome.deployment_id));
    for path in outcome.written_files() {
        reporter.detail(path.display());
    }
    Ok(())
}

impl ValueEnum for ScriptCategory {
    fn value_variants<'a>() -> &'a [Self] {
        &ScriptCategory::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.name()).help(self.description()))
    }
}
