use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, AuthCommands, ReportCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify a query and open the matching report view.
    Search(SearchArgs),
    /// Community reports.
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Admin-scoped record editing.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}

/// Arguments for `tck search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Tax ID (NIP) or phone number; separators are stripped.
    pub query: String,
}
