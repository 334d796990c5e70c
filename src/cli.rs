use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "catalog-health",
    version,
    about = "Data-integrity health checks for the e-learning catalog workbook"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Health(HealthArgs),
    Sheets(SheetsArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportLang {
    En,
    Fr,
    Ar,
}

impl ReportLang {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct HealthArgs {
    /// SQLite database (one table per sheet) or JSON workbook export; `file://` URLs accepted.
    #[arg(long, default_value = "catalog.sqlite")]
    pub workbook: String,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// Falls back to CATALOG_HEALTH_LANG, then English.
    #[arg(long, value_enum)]
    pub lang: Option<ReportLang>,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SheetsArgs {
    #[arg(long, default_value = "catalog.sqlite")]
    pub workbook: String,
}
