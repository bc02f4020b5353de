//! Command to parse a subject string and print its segments.

use crate::error::CliError;
use crate::utils::{parse_subject, resolve_subject, GlobalOptions};
use clap::Args;
use fieldpath::OutputFormat;

/// Parse a subject string and print its segment sequence.
#[derive(Args)]
pub struct ParseCommand {
    /// Subject string to parse (read from stdin if omitted)
    #[arg(value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// Output format: human, json, or yaml
    #[arg(long, value_name = "FORMAT", default_value = "human", env = "FIELDPATH_FORMAT")]
    pub format: String,
}

impl ParseCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let format = OutputFormat::parse(&self.format).map_err(CliError::InvalidArguments)?;

        let subject = resolve_subject(self.subject)?;
        let path = parse_subject(&subject)?;

        let rendered = format
            .create_formatter()
            .format(&path)
            .map_err(CliError::from)?;
        println!("{rendered}");
        Ok(())
    }
}
