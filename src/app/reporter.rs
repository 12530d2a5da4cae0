//! User-facing status output, gated by the selected verbosity.

use std::fmt::Display;

/// Output level chosen with `--verbose` / `--quiet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// `--quiet` wins when both flags are somehow present.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Verbosity::Quiet,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Default `tracing` filter for this level.
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "suitegen=debug,warn",
        }
    }
}

/// Prints status lines; passed explicitly to every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn info(&self, message: impl Display) {
        if !self.is_quiet() {
            println!("{message}");
        }
    }

    pub fn success(&self, message: impl Display) {
        if !self.is_quiet() {
            println!("✅ {message}");
        }
    }

    pub fn warn(&self, message: impl Display) {
        if !self.is_quiet() {
            println!("⚠️  {message}");
        }
    }

    /// Only shown with `--verbose`.
    pub fn detail(&self, message: impl Display) {
        if self.verbosity == Verbosity::Verbose {
            println!("  {message}");
        }
    }

    pub fn error(&self, message: impl Display) {
        if !self.is_quiet() {
            eprintln!("Error: {message}");
        }
    }
}
