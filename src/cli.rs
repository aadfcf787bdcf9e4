//! Command-line interface implementation for skel.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::{EDITOR_ENV, SYSTEM_TEMPLATES_ROOT, USER_TEMPLATES_DIR};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for skel.
#[derive(Parser, Debug)]
#[command(author, version, about = "skel: render project skeletons from template sets", long_about = None)]
pub struct Args {
    /// Name of the template set under the templates root
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Directory containing the template sets
    #[arg(short, long, value_name = "DIR", default_value_os_t = default_templates_root())]
    pub templates: PathBuf,

    /// Directory where the generated tree is written
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Destination subfolder name; defaults to the template set name
    #[arg(short, long, value_name = "NAME")]
    pub destination: Option<String>,

    /// Editor command used by the interactive edit step
    #[arg(short, long, value_name = "CMD", default_value_t = default_editor())]
    pub editor: String,

    /// Open the parameter document in the editor before rendering
    #[arg(long)]
    pub edit: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Computes the default templates root: a per-user data directory when the
/// home directory is known, a fixed system path otherwise.
pub fn default_templates_root() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(USER_TEMPLATES_DIR),
        _ => PathBuf::from(SYSTEM_TEMPLATES_ROOT),
    }
}

fn default_editor() -> String {
    std::env::var(EDITOR_ENV).unwrap_or_default()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
