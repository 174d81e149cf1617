// SPDX-FileCopyrightText: 2026 Usercenter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! usercenter - command-line host for user-center plugins.
//!
//! Loads configuration, registers the Clerk bridge and drives it the way the
//! web host would: login callbacks, user lookups and profile descriptors.

mod commands;
mod health;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;
use usercenter_clerk::ClerkUserCenter;
use usercenter_core::UserCenterError;
use usercenter_plugin::UserCenterRegistry;

use crate::commands::OutputFormat;

/// usercenter - command-line host for user-center plugins.
#[derive(Parser, Debug)]
#[command(name = "usercenter", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show plugin metadata and the login descriptor.
    Info,
    /// Run the login callback with a Clerk session token.
    Login {
        #[arg(long)]
        session_token: String,
    },
    /// Run the signup callback with a Clerk session token.
    Signup {
        #[arg(long)]
        session_token: String,
    },
    /// Look up a user by external ID.
    User { external_id: String },
    /// List users page by page.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        page_size: u32,
    },
    /// Show a user's account status.
    Status { external_id: String },
    /// Show the account settings link for a user.
    Settings { external_id: String },
    /// Show a user's personal branding.
    Branding { external_id: String },
    /// Report health of registered user centers.
    Health,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => usercenter_config::load_and_validate_path(path),
        None => usercenter_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            usercenter_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.general.log_level);

    let registry = commands::build_registry(&config.clerk);
    let format = OutputFormat::from_json_flag(cli.json);
    let use_color = !cli.plain && std::io::stdout().is_terminal();

    let result = run(cli.command, &registry, format, use_color).await;
    shutdown(&registry).await;

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("usercenter: {e}");
            std::process::exit(1);
        }
    }
}

/// Dispatches a command against the registered Clerk plugin.
///
/// Commands that reach the provider go through [`UserCenterRegistry::adapter`]
/// and are refused unless the plugin is enabled. Descriptor commands (`info`,
/// `status`, `settings`, `branding`) read the entry regardless of status so an
/// unconfigured installation can still be inspected.
async fn run(
    command: Commands,
    registry: &UserCenterRegistry,
    format: OutputFormat,
    use_color: bool,
) -> Result<String, UserCenterError> {
    let slug = ClerkUserCenter::manifest().slug_name.as_str();
    let entry = move || {
        registry
            .get(slug)
            .ok_or_else(|| UserCenterError::PluginNotFound {
                slug: slug.to_string(),
            })
    };

    match command {
        Commands::Health => Ok(health::run_health(registry, format, use_color).await),
        Commands::Info => Ok(commands::run_info(entry()?, format)),
        Commands::Login { session_token } => {
            let adapter = registry.adapter(slug)?;
            commands::run_callback(adapter.as_ref(), &session_token, false, format).await
        }
        Commands::Signup { session_token } => {
            let adapter = registry.adapter(slug)?;
            commands::run_callback(adapter.as_ref(), &session_token, true, format).await
        }
        Commands::User { external_id } => {
            let adapter = registry.adapter(slug)?;
            commands::run_user(adapter.as_ref(), &external_id, format).await
        }
        Commands::List { page, page_size } => {
            let adapter = registry.adapter(slug)?;
            commands::run_list(adapter.as_ref(), page, page_size, format).await
        }
        Commands::Status { external_id } => {
            Ok(commands::run_status(entry()?.adapter.as_ref(), &external_id, format).await)
        }
        Commands::Settings { external_id } => {
            Ok(commands::run_settings(entry()?.adapter.as_ref(), &external_id, format).await)
        }
        Commands::Branding { external_id } => {
            Ok(commands::run_branding(entry()?.adapter.as_ref(), &external_id, format).await)
        }
    }
}

async fn shutdown(registry: &UserCenterRegistry) {
    for entry in registry.list_all() {
        if let Err(e) = entry.adapter.shutdown().await {
            warn!(plugin = %entry.info.slug_name, error = %e, "plugin shutdown failed");
        }
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("usercenter={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
