//! Command to check that a subject string is well-formed.

use crate::error::CliError;
use crate::utils::{resolve_subject, GlobalOptions};
use clap::Args;
use fieldpath::Path;

/// Check that a subject string is well-formed path notation.
#[derive(Args)]
pub struct ValidateCommand {
    /// Subject string to check (read from stdin if omitted)
    #[arg(value_name = "SUBJECT")]
    pub subject: Option<String>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let subject = resolve_subject(self.subject)?;

        match Path::parse(&subject) {
            Ok(path) => {
                if !global.quiet {
                    println!("{} segment(s)", path.len());
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Parse error: {e}");
                Err(CliError::SemanticFailure(format!(
                    "subject {subject:?} is not a valid path"
                )))
            }
        }
    }
}
