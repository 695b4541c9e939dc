use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::clients::wb::WbClient;
use crate::infra::config::{AppConfig, ConfigError, Mode};
use crate::infra::credentials::{CredentialScope, Credentials};

#[derive(Parser, Debug)]
#[command(name = "wb-communications-mcp")]
#[command(about = "MCP server for the Wildberries seller communications API")]
#[command(version)]
pub struct Cli {
    /// Communications API token (`WB_COMMUNICATIONS_OAUTH_TOKEN` wins if set)
    #[arg(long = "apiKey", global = true)]
    pub api_key: Option<String>,

    /// Token for return claims (`WB_RETURNS_OAUTH_TOKEN` wins if set)
    #[arg(long = "returnsApiKey", global = true)]
    pub returns_api_key: Option<String>,

    /// Transport, overrides `MODE`
    #[arg(long, global = true, value_enum)]
    pub mode: Option<Mode>,

    /// HTTP port in server mode, overrides `PORT`
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// TOML config file, overrides `WB_MCP_CONFIG`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the MCP server (default)
    Serve,
    /// Validate configuration
    Config {
        /// Validate config without printing it
        #[arg(long)]
        validate: bool,
    },
    /// Check connectivity and the token against the API
    Ping,
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    run_cli(cli).await
}

pub async fn run_cli(cli: Cli) -> ExitCode {
    let cfg = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let credentials = Credentials::from_process(cli.api_key, cli.returns_api_key);
    run_commands(cli.command.unwrap_or(Commands::Serve), cfg, credentials).await
}

pub async fn run_commands(command: Commands, cfg: AppConfig, credentials: Credentials) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server(&cfg, credentials).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server stopped");
                eprintln!("❌ Server error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate } => {
            if !validate {
                print_config(&cfg);
            }
            println!("✅ Configuration is valid");
            ExitCode::SUCCESS
        }
        Commands::Ping => match ping(&cfg, &credentials).await {
            Ok(summary) => {
                println!("✅ API reachable: {}", summary);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Ping failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Config file and environment, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        cfg.server.mode = mode;
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn print_config(cfg: &AppConfig) {
    println!("📋 Configuration:");
    println!("  Mode: {}", cfg.server.mode);
    println!("  Port: {}", cfg.server.port);
    println!("  Feedbacks API: {}", cfg.api.feedbacks_base_url);
    println!("  Returns API: {}", cfg.api.returns_base_url);
    println!("  Timeouts: connect {} ms, request {} ms", cfg.api.connect_timeout_ms, cfg.api.timeout_ms);
}

async fn ping(cfg: &AppConfig, credentials: &Credentials) -> Result<String, Box<dyn std::error::Error>> {
    let scope = CredentialScope::Communications;
    let key = credentials
        .for_scope(scope)
        .ok_or_else(|| Credentials::missing_message(scope))?;
    let client = WbClient::from_config(&cfg.api)?;
    let env = client.get_new_feedbacks_questions(key).await?;
    if env.error {
        return Err(format!("remote error: {}", env.error_text).into());
    }
    Ok(match env.data {
        Some(flags) => format!(
            "new feedbacks: {}, new questions: {}",
            flags.has_new_feedbacks, flags.has_new_questions
        ),
        None => "no data".into(),
    })
}
