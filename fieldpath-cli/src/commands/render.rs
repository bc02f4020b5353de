//! Command to print the dotted rendering of a parsed path.

use crate::error::CliError;
use crate::utils::{parse_subject, resolve_subject, GlobalOptions};
use clap::Args;

/// Print the dotted rendering of a parsed path.
///
/// The rendering joins field identifiers with `.`; element and key
/// accessors are not reconstructed into bracket form.
#[derive(Args)]
pub struct RenderCommand {
    /// Subject string to parse (read from stdin if omitted)
    #[arg(value_name = "SUBJECT")]
    pub subject: Option<String>,
}

impl RenderCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let subject = resolve_subject(self.subject)?;
        let path = parse_subject(&subject)?;

        println!("{path}");
        Ok(())
    }
}
