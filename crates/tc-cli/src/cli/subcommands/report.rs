use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Community report commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// File a new report (requires login).
    New(ReportNewArgs),
    /// List the latest community reports.
    Latest {
        /// Max rows to show.
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Arguments for `tck report new`.
///
/// Company mode takes `--nip`; person mode takes `--name` and/or `--phone`.
#[derive(Clone, Debug, Args)]
pub struct ReportNewArgs {
    /// Company tax ID (company report mode).
    #[arg(long, conflicts_with_all = ["name", "phone"])]
    pub nip: Option<String>,
    /// Company name, if known (company report mode).
    #[arg(long, requires = "nip")]
    pub company_name: Option<String>,
    /// Person name or alias (person report mode).
    #[arg(long)]
    pub name: Option<String>,
    /// Phone number (person report mode).
    #[arg(long)]
    pub phone: Option<String>,
    /// Severity rating: 1 = outright scam, 5 = trustworthy.
    #[arg(long, default_value_t = 1)]
    pub rating: u8,
    /// Reason code: SCAM, SPAM, TOWAR, RODO, or OTHER.
    #[arg(long, default_value = "SCAM")]
    pub reason: String,
    /// What happened.
    #[arg(long)]
    pub comment: String,
    /// Email address used by the reported party.
    #[arg(long)]
    pub email: Option<String>,
    /// Social profile link (Facebook, OLX, ...).
    #[arg(long)]
    pub profile_link: Option<String>,
    /// Bank account used by the reported party.
    #[arg(long)]
    pub bank_account: Option<String>,
    /// Screenshot image to upload as evidence.
    #[arg(long)]
    pub screenshot: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands};
    use crate::cli::subcommands::ReportCommands;

    #[test]
    fn company_and_person_identifiers_conflict() {
        let parsed = Cli::try_parse_from([
            "tck", "report", "new", "--nip", "5252525252", "--phone", "48600700800",
            "--comment", "x",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn person_report_parses_with_phone_only() {
        let cli = Cli::try_parse_from([
            "tck",
            "report",
            "new",
            "--phone",
            "48600700800",
            "--reason",
            "spam",
            "--comment",
            "Glucha sluchawka.",
        ])
        .expect("cli should parse");
        let Commands::Report {
            action: ReportCommands::New(args),
        } = cli.command
        else {
            panic!("expected report new");
        };
        assert_eq!(args.phone.as_deref(), Some("48600700800"));
        assert_eq!(args.rating, 1);
        assert!(args.screenshot.is_none());
    }
}
