use clap::{Args, Subcommand};

/// Admin-scoped record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List company records.
    Companies,
    /// List person records.
    Persons,
    /// Company record operations.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Person record operations.
    Person {
        #[command(subcommand)]
        action: PersonCommands,
    },
}

/// Company record operations.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// Fetch a company record by tax ID.
    Get { nip: String },
    /// Edit fields on a company record.
    Edit(CompanyEditArgs),
    /// Link an additional phone number to a company.
    LinkPhone { nip: String, phone: String },
}

/// Field overrides for `tck admin company edit`.
///
/// Unset flags keep the server's current value; the save always PATCHes the
/// same fixed field set.
#[derive(Clone, Debug, Args)]
pub struct CompanyEditArgs {
    pub nip: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Trust score, 0-100.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub trust_score: Option<u32>,
    #[arg(long)]
    pub risk_level: Option<String>,
    #[arg(long)]
    pub status_vat: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Registration date (YYYY-MM-DD).
    #[arg(long)]
    pub reg_date: Option<String>,
    /// Data source tag (DB / OSINT / manual).
    #[arg(long)]
    pub source: Option<String>,
    /// Operator note.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Person record operations.
#[derive(Clone, Debug, Subcommand)]
pub enum PersonCommands {
    /// Fetch a person record by numeric ID.
    Get { id: i64 },
    /// Edit fields on a person record.
    Edit(PersonEditArgs),
}

/// Field overrides for `tck admin person edit`.
#[derive(Clone, Debug, Args)]
pub struct PersonEditArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub bank_account: Option<String>,
    /// Trust score, 0-100.
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub trust_score: Option<u32>,
    #[arg(long)]
    pub risk_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::{Cli, Commands};
    use crate::cli::subcommands::{AdminCommands, CompanyCommands};

    #[test]
    fn company_edit_parses_field_overrides() {
        let cli = Cli::try_parse_from([
            "tck",
            "admin",
            "company",
            "edit",
            "5252525252",
            "--trust-score",
            "15",
            "--risk-level",
            "Krytyczny",
        ])
        .expect("cli should parse");
        let Commands::Admin {
            action:
                AdminCommands::Company {
                    action: CompanyCommands::Edit(args),
                },
        } = cli.command
        else {
            panic!("expected admin company edit");
        };
        assert_eq!(args.nip, "5252525252");
        assert_eq!(args.trust_score, Some(15));
        assert!(args.address.is_none());
    }

    #[test]
    fn trust_score_above_range_is_rejected() {
        let parsed = Cli::try_parse_from([
            "tck",
            "admin",
            "company",
            "edit",
            "5252525252",
            "--trust-score",
            "150",
        ]);
        assert!(parsed.is_err());
    }
}
