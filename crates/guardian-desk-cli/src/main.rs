// crates/guardian-desk-cli/src/main.rs
// ============================================================================
// Module: Guardian Desk CLI Entry Point
// Description: Command dispatcher for the dashboard API and offline reads.
// Purpose: Provide a safe, localized CLI for serving and inspecting the dashboard.
// Dependencies: clap, guardian-desk-config, guardian-desk-core, guardian-desk-http
// ============================================================================

//! ## Overview
//! The Guardian Desk CLI starts the dashboard API server and answers the
//! same reads offline: the filtered document list, the derived scan
//! statistics, and the activity feed. All user-facing strings are routed
//! through the i18n catalog to prepare for future localization. Search terms
//! and config inputs are untrusted and validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use guardian_desk_cli::serve_policy::ALLOW_NON_LOOPBACK_ENV;
use guardian_desk_cli::serve_policy::BindOutcome;
use guardian_desk_cli::serve_policy::ServePolicyError;
use guardian_desk_cli::serve_policy::enforce_local_only;
use guardian_desk_cli::serve_policy::resolve_allow_non_loopback;
use guardian_desk_cli::t;
use guardian_desk_config::GuardianDeskConfig;
use guardian_desk_core::Activity;
use guardian_desk_core::Dashboard;
use guardian_desk_core::Document;
use guardian_desk_core::ScanStats;
use guardian_desk_core::SearchQuery;
use guardian_desk_core::activity_icon;
use guardian_desk_core::document_icon;
use guardian_desk_http::DashboardServer;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "guardian-desk", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Guardian Desk dashboard API server.
    Serve(ServeCommand),
    /// List documents selected by the dashboard search rule.
    Documents(DocumentsCommand),
    /// Print the derived scan statistics.
    Stats(StatsCommand),
    /// Print the activity feed.
    Activities(ActivitiesCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Arguments for the serve command.
#[derive(Args, Debug)]
struct ServeCommand {
    /// Path to the guardian-desk.toml configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Permit binding to a non-loopback address.
    #[arg(long, action = ArgAction::SetTrue)]
    allow_non_loopback: bool,
}

/// Arguments for the documents command.
#[derive(Args, Debug)]
struct DocumentsCommand {
    /// Name-search term (takes precedence over the tag term).
    #[arg(long, value_name = "TERM")]
    name: Option<String>,
    /// Tag-search term (ignored when a name term is present).
    #[arg(long, value_name = "TERM")]
    tag: Option<String>,
    /// Emit JSON instead of human-readable lines.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
    /// Path to the guardian-desk.toml configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for the stats command.
#[derive(Args, Debug)]
struct StatsCommand {
    /// Emit JSON instead of human-readable lines.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Arguments for the activities command.
#[derive(Args, Debug)]
struct ActivitiesCommand {
    /// Emit JSON instead of human-readable lines.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

/// Supported config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Load and validate the effective configuration.
    Validate {
        /// Path to the guardian-desk.toml configuration file.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error carrying a localized, user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Localized error message.
    message: String,
}

impl CliError {
    /// Wraps a localized message in a CLI error.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for CLI command handlers.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Parses arguments and dispatches the selected command.
fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.show_version {
        return finish(run_version());
    }
    let Some(command) = cli.command else {
        return print_long_help();
    };
    let result = match command {
        Commands::Serve(serve) => run_serve(serve),
        Commands::Documents(documents) => run_documents(documents),
        Commands::Stats(stats) => run_stats(&stats),
        Commands::Activities(activities) => run_activities(&activities),
        Commands::Config {
            command: ConfigCommand::Validate {
                config,
            },
        } => run_config_validate(config.as_deref()),
    };
    finish(result)
}

/// Converts a handler result into a process exit code.
fn finish(result: CliResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => emit_error(&error.to_string()),
    }
}

/// Prints the long help text when no subcommand is given.
fn print_long_help() -> ExitCode {
    let mut command = Cli::command();
    if command.print_help().is_err() {
        return ExitCode::FAILURE;
    }
    if write_stdout_line("").is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// ============================================================================
// SECTION: Command Handlers
// ============================================================================

/// Prints the CLI version line.
fn run_version() -> CliResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    write_stdout_line(&t!("main.version", version = version))
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Starts the dashboard API server under the loopback-only policy.
fn run_serve(command: ServeCommand) -> CliResult<()> {
    let config = GuardianDeskConfig::load_or_default(command.config.as_deref())
        .map_err(|err| CliError::new(t!("serve.config.load_failed", error = err)))?;
    let allow_non_loopback = resolve_allow_non_loopback(command.allow_non_loopback)
        .map_err(|err| CliError::new(policy_message(&err)))?;
    let outcome = enforce_local_only(&config, allow_non_loopback)
        .map_err(|err| CliError::new(policy_message(&err)))?;
    warn_network_exposure(outcome)?;

    let bind = outcome.addr();
    let server = DashboardServer::from_config(config)
        .map_err(|err| CliError::new(t!("serve.init_failed", error = err)))?;
    write_stderr_line(&t!("serve.listening", bind = bind))
        .map_err(|err| CliError::new(output_error("stderr", &err)))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| CliError::new(t!("serve.runtime_failed", error = err)))?;
    runtime.block_on(server.serve()).map_err(|err| CliError::new(t!("serve.failed", error = err)))
}

/// Lists documents selected by the dashboard search rule.
fn run_documents(command: DocumentsCommand) -> CliResult<()> {
    let config = GuardianDeskConfig::load_or_default(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    let name_term = command.name.unwrap_or_default();
    let tag_term = command.tag.unwrap_or_default();
    check_term(&name_term, config.limits.max_term_chars)?;
    check_term(&tag_term, config.limits.max_term_chars)?;

    let dashboard = Dashboard::from_seed();
    let query = SearchQuery::new(name_term, tag_term);
    let selected = dashboard.documents(&query);
    if command.json {
        let payload = documents_json(&selected)?;
        return write_stdout_line(&payload)
            .map_err(|err| CliError::new(output_error("stdout", &err)));
    }
    if selected.is_empty() {
        return write_stdout_line(&t!("documents.empty"))
            .map_err(|err| CliError::new(output_error("stdout", &err)));
    }
    for document in selected {
        write_stdout_line(&document_line(document))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(())
}

/// Prints the derived scan statistics.
fn run_stats(command: &StatsCommand) -> CliResult<()> {
    let stats = Dashboard::from_seed().stats();
    if command.json {
        let payload = serde_json::to_string_pretty(&stats)
            .map_err(|err| CliError::new(t!("json.serialize_failed", error = err)))?;
        return write_stdout_line(&payload)
            .map_err(|err| CliError::new(output_error("stdout", &err)));
    }
    for line in stats_lines(stats) {
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(())
}

/// Prints the activity feed.
fn run_activities(command: &ActivitiesCommand) -> CliResult<()> {
    let dashboard = Dashboard::from_seed();
    if command.json {
        let payload = activities_json(dashboard.activities())?;
        return write_stdout_line(&payload)
            .map_err(|err| CliError::new(output_error("stdout", &err)));
    }
    for activity in dashboard.activities() {
        write_stdout_line(&activity_line(activity))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(())
}

/// Loads and validates the effective configuration.
fn run_config_validate(path: Option<&std::path::Path>) -> CliResult<()> {
    GuardianDeskConfig::load_or_default(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Serve Helpers
// ============================================================================

/// Formats a localized message for a serve policy failure.
fn policy_message(error: &ServePolicyError) -> String {
    match error {
        ServePolicyError::Config(message) => {
            t!("serve.config.load_failed", error = message)
        }
        ServePolicyError::InvalidOptIn(value) => {
            t!("serve.bind.allow_env_invalid", env = ALLOW_NON_LOOPBACK_ENV, value = value)
        }
        ServePolicyError::Refused(addr) => {
            t!("serve.bind.non_loopback_opt_in", bind = addr, env = ALLOW_NON_LOOPBACK_ENV)
        }
    }
}

/// Warns on stderr when the dashboard is exposed beyond loopback.
fn warn_network_exposure(outcome: BindOutcome) -> CliResult<()> {
    let BindOutcome::NonLoopback(addr) = outcome else {
        return Ok(());
    };
    for line in [
        t!("serve.warn.network.header"),
        t!("serve.warn.network.bind", bind = addr),
        t!("serve.warn.network.footer"),
    ] {
        write_stderr_line(&line).map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Output Formatting
// ============================================================================

/// Rejects search terms longer than the configured character limit.
fn check_term(term: &str, limit: usize) -> CliResult<()> {
    if term.chars().count() > limit {
        return Err(CliError::new(t!("documents.term_too_long", limit = limit)));
    }
    Ok(())
}

/// Formats a human-readable document line.
fn document_line(document: &Document) -> String {
    t!(
        "documents.entry",
        name = document.name,
        status = document.status,
        pii = document.pii_count,
        icon = document_icon(&document.name)
    )
}

/// Formats the four human-readable statistics lines.
fn stats_lines(stats: ScanStats) -> Vec<String> {
    vec![
        t!("stats.total", value = stats.total_documents),
        t!("stats.with_pii", value = stats.documents_with_pii),
        t!("stats.pii_found", value = stats.total_pii_found),
        t!("stats.alerts", value = stats.recent_alerts),
    ]
}

/// Formats a human-readable activity line.
fn activity_line(activity: &Activity) -> String {
    t!(
        "activities.entry",
        user = activity.user,
        kind = activity.kind,
        file = activity.file,
        time = activity.timestamp
    )
}

/// Serializes selected documents as a JSON array with derived icons.
fn documents_json(documents: &[&Document]) -> CliResult<String> {
    let mut entries = Vec::with_capacity(documents.len());
    for document in documents {
        let mut value = serde_json::to_value(document)
            .map_err(|err| CliError::new(t!("json.serialize_failed", error = err)))?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "icon".to_string(),
                serde_json::Value::String(document_icon(&document.name).to_string()),
            );
        }
        entries.push(value);
    }
    serde_json::to_string_pretty(&serde_json::Value::Array(entries))
        .map_err(|err| CliError::new(t!("json.serialize_failed", error = err)))
}

/// Serializes the activity feed as a JSON array with derived icons.
fn activities_json(activities: &[Activity]) -> CliResult<String> {
    let mut entries = Vec::with_capacity(activities.len());
    for activity in activities {
        let mut value = serde_json::to_value(activity)
            .map_err(|err| CliError::new(t!("json.serialize_failed", error = err)))?;
        if let Some(object) = value.as_object_mut() {
            object.insert(
                "icon".to_string(),
                serde_json::Value::String(activity_icon(activity.kind).to_string()),
            );
        }
        entries.push(value);
    }
    serde_json::to_string_pretty(&serde_json::Value::Array(entries))
        .map_err(|err| CliError::new(t!("json.serialize_failed", error = err)))
}

// ============================================================================
// SECTION: Output Streams
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
