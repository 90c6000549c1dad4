use crate::config::ResolvedConfig;
use crate::constants::COMPLETION_MARKER;
use crate::errors::{AppError, AppResult};
use crate::fetcher::HttpTransport;
use crate::format::{resolve_format, DirectoryFormat};
use crate::pipeline;
use crate::validation::{check_org_id, Credentials};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

const AFTER_HELP: &str = "\
Pulls the FedWire and FedACH routing directories in the requested format and writes
fedwire_routing_numbers.<ext> and fedach_routing_numbers.<ext> to the output directory.

  FORMAT         XML, JSON or TEXT (fixed width). Anything else falls back to TEXT.
  ORG_ID         E-Payments Directory organization ID, 9 numeric digits.
  DOWNLOAD_CODE  E-Payments Directory download code, 36 characters in 5 sections
                 of 8-4-4-4-12 characters separated by hyphens.

Arguments that are not given on the command line are prompted for.

Example:
  fed-routing-cli TEXT 123456789 AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE";

const FORMAT_PROMPT: &str = "Enter the desired return format (XML, JSON, or TEXT): ";
const ORG_ID_PROMPT: &str = "Enter your Organization ID (9 numeric digits): ";
const DOWNLOAD_CODE_PROMPT: &str =
    "Enter your Download Code (36 characters in 5 sections separated by 4 hyphens): ";

/// Raw, unvalidated values taken from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub format: Option<String>,
    pub org_id: Option<String>,
    pub download_code: Option<String>,
}

/// Builds the command-line definition.
pub fn build_command() -> Command<'static> {
    Command::new("fed-routing-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .after_help(AFTER_HELP)
        .arg(
            Arg::new("format")
                .help("Return format: XML, JSON or TEXT")
                .index(1)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("org_id")
                .help("Organization ID (9 numeric digits)")
                .index(2)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("download_code")
                .help("Download code (8-4-4-4-12 characters separated by hyphens)")
                .index(3)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory the routing number files are written to")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

impl RawInputs {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            format: matches.get_one::<String>("format").cloned(),
            org_id: matches.get_one::<String>("org_id").cloned(),
            download_code: matches.get_one::<String>("download_code").cloned(),
        }
    }
}

/// Loads the configuration file (if any) and applies command-line overrides.
pub fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = dir.clone();
    }
    Ok(config)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> AppResult<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InvalidInput(format!(
            "No input received for: {}",
            message.trim_end_matches(": ")
        )));
    }
    Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Resolves the format and validates the credentials, prompting for any missing value.
///
/// Prompts follow the order format, org id, download code. The org id is checked before
/// the download code is asked for, so a bad org id stops the run immediately.
///
/// # Errors
///
/// Returns `Validation` for a malformed org id or download code and `InvalidInput` /
/// `IoError` when a prompt cannot be answered. An unknown format is never an error.
pub fn acquire_inputs<R: BufRead, W: Write>(
    raw: RawInputs,
    input: &mut R,
    output: &mut W,
) -> AppResult<(DirectoryFormat, Credentials)> {
    let format_token = match raw.format {
        Some(token) => token,
        None => prompt(input, output, FORMAT_PROMPT)?,
    };
    let format = resolve_format(&format_token);

    let org_id = match raw.org_id {
        Some(org_id) => org_id,
        None => prompt(input, output, ORG_ID_PROMPT)?,
    };
    check_org_id(&org_id)?;

    let download_code = match raw.download_code {
        Some(code) => code,
        None => prompt(input, output, DOWNLOAD_CODE_PROMPT)?,
    };

    let credentials = Credentials::new(org_id, download_code)?;
    Ok((format, credentials))
}

/// Parses command-line arguments and downloads both routing directories.
///
/// The workflow:
/// 1. Loads configuration (`--config`, `--output-dir`)
/// 2. Reads format, org id and download code from arguments or prompts
/// 3. Validates the credentials; a failure ends the run before any request is made
/// 4. Fetches the Fedwire and then the FedACH directory
/// 5. Prints the completion marker
///
/// Failures while fetching a directory are logged and do not make this function fail.
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let config = resolve_config(&matches)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let (format, credentials) =
        acquire_inputs(RawInputs::from_matches(&matches), &mut input, &mut output)?;

    info!(
        format = %format,
        org_id = credentials.org_id(),
        output_dir = %config.output_dir.display(),
        "Starting directory download"
    );

    let transport = HttpTransport::new()?;
    let outcomes = pipeline::run(&transport, &credentials, format, &config).await;
    pipeline::summarize(&outcomes);

    println!("{COMPLETION_MARKER}");
    Ok(())
}
