//! assetdesk CLI - Inspect the asset desk's role-based access rules
//!
//! Usage:
//!   assetdesk roles                          - List roles and their capabilities
//!   assetdesk matrix                         - Capability x role table
//!   assetdesk permissions --role <role>      - Derived permission set
//!   assetdesk guard --allow <roles> --role <role>  - Evaluate an access guard
//!   assetdesk view <screen> --role <role>    - Control visibility for a screen
//!   assetdesk check <control> --role <role>  - Whether one control is visible
//!   assetdesk session                        - Interactive session

use clap::{Parser, Subcommand};
use cli::commands::{
    resolve_profile, CheckCommand, GuardCommand, MatrixCommand, PermissionsCommand, RolesCommand,
    ViewCommand,
};
use cli::interactive::InteractiveCli;
use cli::Context;
use shared::AppConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assetdesk")]
#[command(about = "assetdesk - Role-based access rules for the asset desk")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Act as a user with this role (omit to act signed out)
    #[arg(short, long, global = true)]
    role: Option<String>,

    /// Act as the user in this JSON profile file
    #[arg(short, long, global = true)]
    profile: Option<PathBuf>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List roles and their capabilities
    Roles(RolesCommand),
    /// Print the capability x role table
    Matrix(MatrixCommand),
    /// Show derived permissions
    Permissions(PermissionsCommand),
    /// Evaluate an access guard
    Guard(GuardCommand),
    /// Show control visibility for a screen
    View(ViewCommand),
    /// Check whether a single control is visible
    Check(CheckCommand),
    /// Start an interactive session
    Session,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context {
        profile: resolve_profile(cli.role.as_deref(), cli.profile.as_deref())?,
        config,
        json: cli.json,
    };

    match cli.command {
        Some(Commands::Roles(cmd)) => cmd.run(&ctx),
        Some(Commands::Matrix(cmd)) => cmd.run(&ctx),
        Some(Commands::Permissions(cmd)) => cmd.run(&ctx),
        Some(Commands::Guard(cmd)) => cmd.run(&ctx),
        Some(Commands::View(cmd)) => cmd.run(&ctx),
        Some(Commands::Check(cmd)) => cmd.run(&ctx),
        Some(Commands::Session) | None => {
            let mut interactive = InteractiveCli::new(&ctx.config, ctx.profile.clone());
            interactive.run()
        }
    }
}
