// crates/tenant-ident-cli/src/main.rs
// ============================================================================
// Module: Tenant Ident CLI Entry Point
// Description: Command dispatcher for GUID, tenant, and version normalization.
// Purpose: Expose the normalizers for scripting and diagnostics.
// Dependencies: clap, serde, serde_json, tenant-ident-config, tenant-ident-core, thiserror.
// ============================================================================

//! ## Overview
//! The Tenant Ident CLI reads identifiers from arguments or a JSON document,
//! runs one normalizer over the batch, and prints one result per line (or a
//! JSON document with `--format json`). Inputs are untrusted: JSON documents
//! are read with a byte limit and batches are capped before processing.
//! Errors print a single diagnostic to stderr and exit non-zero.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use tenant_ident_config::ConfigError;
use tenant_ident_config::LimitsConfig;
use tenant_ident_config::TenantIdentConfig;
use tenant_ident_core::AadVersion;
use tenant_ident_core::IdentifierInput;
use tenant_ident_core::NormalizeError;
use tenant_ident_core::TenantPolicy;
use tenant_ident_core::VersionToken;
use tenant_ident_core::explain_tenant_input;
use tenant_ident_core::is_guid_input;
use tenant_ident_core::normalize_guid_input;
use tenant_ident_core::normalize_tenant_input;
use tenant_ident_core::normalize_version;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Path value that selects stdin for `--input`.
const STDIN_PATH: &str = "-";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "tenant-ident", version, disable_help_subcommand = true)]
struct Cli {
    /// Config file path (overrides `TENANT_IDENT_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether each value is a GUID.
    IsGuid(BatchArgs),
    /// Canonicalize GUIDs; fails if any value is not a GUID.
    Guid(BatchArgs),
    /// Normalize tenant identifiers.
    Tenant(BatchArgs),
    /// Show which tenant rule applies to each value.
    Explain(BatchArgs),
    /// Resolve an AAD version token to its numeric code.
    Version(VersionArgs),
}

/// Identifier batch source.
#[derive(Args, Debug)]
struct BatchArgs {
    /// Identifier values.
    #[arg(value_name = "VALUE", conflicts_with = "input")]
    values: Vec<String>,
    /// JSON document holding a string or an array of strings (`-` reads stdin).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
}

/// Version token argument.
#[derive(Args, Debug)]
struct VersionArgs {
    /// Version token: `v1.0`, `v2.0`, `1`, or `2`.
    #[arg(value_name = "TOKEN", allow_hyphen_values = true)]
    token: String,
}

/// Output rendering format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// One result per line.
    Text,
    /// A single JSON document.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error with a stable code for JSON diagnostics.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Stable error label.
    code: &'static str,
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
    const fn new(code: &'static str, message: String) -> Self {
        Self {
            code,
            message,
        }
    }
}

impl From<NormalizeError> for CliError {
    fn from(err: NormalizeError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::new("config", err.to_string())
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

/// Errors returned by bounded reads.
#[derive(Debug)]
enum ReadLimitError {
    /// I/O failure.
    Io(std::io::Error),
    /// Input exceeds the configured limit.
    TooLarge {
        /// Allowed limit in bytes.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Result of one command, ready for rendering.
#[derive(Debug, PartialEq)]
enum Report {
    /// Per-element GUID flags.
    Flags(Vec<bool>),
    /// Per-element normalized values.
    Values(Vec<String>),
    /// Per-element tenant rule explanations.
    Explained(Vec<Explanation>),
    /// Resolved version.
    Version(AadVersion),
}

/// Tenant rule applied to one input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Explanation {
    /// Raw input value.
    input: String,
    /// Rule label.
    kind: &'static str,
    /// Normalized output.
    normalized: String,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => emit_error(&err, cli.format),
    }
}

/// Loads configuration, executes the command, and prints the report.
fn run(cli: &Cli) -> CliResult<()> {
    let config = TenantIdentConfig::load(cli.config.as_deref())?;
    let report = execute(&cli.command, &config)?;
    let rendered = render(&report, cli.format)?;
    write_stdout_bytes(rendered.as_bytes())
        .map_err(|err| CliError::new("output", format!("failed to write stdout: {err}")))
}

/// Executes a command against the loaded configuration.
fn execute(command: &Commands, config: &TenantIdentConfig) -> CliResult<Report> {
    match command {
        Commands::IsGuid(args) => {
            let input = load_batch(args, config.limits)?;
            Ok(Report::Flags(is_guid_input(&input)))
        }
        Commands::Guid(args) => {
            let input = load_batch(args, config.limits)?;
            Ok(Report::Values(normalize_guid_input(&input)?))
        }
        Commands::Tenant(args) => {
            let input = load_batch(args, config.limits)?;
            let policy = config.tenant_policy()?;
            Ok(Report::Values(normalize_tenant_input(&policy, &input)?))
        }
        Commands::Explain(args) => {
            let input = load_batch(args, config.limits)?;
            let policy = config.tenant_policy()?;
            Ok(Report::Explained(explain(&policy, &input)?))
        }
        Commands::Version(args) => {
            Ok(Report::Version(normalize_version(&VersionToken::parse_arg(&args.token))?))
        }
    }
}

/// Pairs each tenant with the rule that normalizes it.
fn explain(policy: &TenantPolicy, input: &IdentifierInput) -> CliResult<Vec<Explanation>> {
    let explained = explain_tenant_input(policy, input)?;
    let IdentifierInput::Text(values) = input else {
        return Ok(Vec::new());
    };
    Ok(values
        .iter()
        .zip(explained)
        .map(|(value, (kind, normalized))| Explanation {
            input: value.clone(),
            kind: kind.as_str(),
            normalized,
        })
        .collect())
}

// ============================================================================
// SECTION: Input
// ============================================================================

/// Resolves the identifier batch from arguments or a JSON document.
fn load_batch(args: &BatchArgs, limits: LimitsConfig) -> CliResult<IdentifierInput> {
    let input = match &args.input {
        Some(path) => {
            let bytes = read_input(path, limits.max_input_bytes).map_err(|err| match err {
                ReadLimitError::Io(err) => CliError::new(
                    "input",
                    format!("failed to read input {}: {err}", path.display()),
                ),
                ReadLimitError::TooLarge {
                    limit,
                } => CliError::new(
                    "input",
                    format!("input {} exceeds {limit} bytes", path.display()),
                ),
            })?;
            let value: Value = serde_json::from_slice(&bytes).map_err(|err| {
                CliError::new("input", format!("input {} is not JSON: {err}", path.display()))
            })?;
            IdentifierInput::from_json(&value)
        }
        None => IdentifierInput::from(args.values.clone()),
    };
    if input.len() > limits.max_batch {
        return Err(CliError::new(
            "input",
            format!("batch of {} exceeds limit of {}", input.len(), limits.max_batch),
        ));
    }
    Ok(input)
}

/// Reads the input document from a file or stdin.
fn read_input(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    if path.as_os_str() == STDIN_PATH {
        let stdin = std::io::stdin();
        return read_with_limit(stdin.lock(), max_bytes);
    }
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let size = file.metadata().map_err(ReadLimitError::Io)?.len();
    if !usize::try_from(size).is_ok_and(|size| size <= max_bytes) {
        return Err(ReadLimitError::TooLarge {
            limit: max_bytes,
        });
    }
    read_with_limit(file, max_bytes)
}

/// Reads at most `max_bytes`, failing when the reader holds more.
fn read_with_limit(reader: impl Read, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        limit: max_bytes,
    })?;
    let mut limited = reader.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        return Err(ReadLimitError::TooLarge {
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Renders a report in the selected format.
fn render(report: &Report, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => {
            let value = match report {
                Report::Flags(flags) => json!(flags),
                Report::Values(values) => json!(values),
                Report::Explained(entries) => json!(entries),
                Report::Version(version) => json!(version.code()),
            };
            let mut rendered = serde_json::to_string(&value).map_err(|err| {
                CliError::new("output", format!("failed to encode output: {err}"))
            })?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

/// Renders a report as one line per result.
fn render_text(report: &Report) -> String {
    let lines: Vec<String> = match report {
        Report::Flags(flags) => flags.iter().map(ToString::to_string).collect(),
        Report::Values(values) => values.clone(),
        Report::Explained(entries) => entries
            .iter()
            .map(|entry| format!("{}\t{}\t{}", entry.input, entry.kind, entry.normalized))
            .collect(),
        Report::Version(version) => vec![version.code().to_string()],
    };
    let mut rendered = String::new();
    for line in lines {
        rendered.push_str(&line);
        rendered.push('\n');
    }
    rendered
}

/// Formats an error for stderr in the selected format.
fn render_error(err: &CliError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("error: {}", err.message),
        OutputFormat::Json => json!({"error": err.code, "message": err.message}).to_string(),
    }
}

/// Writes raw bytes to stdout.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(err: &CliError, format: OutputFormat) -> ExitCode {
    let _ = write_stderr_line(&render_error(err, format));
    ExitCode::FAILURE
}
