use clap::{Parser, Subcommand};
use std::process::ExitCode;

use rtm_bot::{register_defaults, BotError, Config, Connection};

#[derive(Parser)]
#[command(name = "rtm-bot")]
#[command(about = "A minimal real-time chat bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,

    /// Target channel for replies (overrides config)
    #[arg(long)]
    channel: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => match run_bot(&cli.config, cli.token, cli.channel) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Bot stopped: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Version => {
            println!("rtm-bot v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => match init_config() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to render config: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn run_bot(config_path: &str, token: Option<String>, channel: Option<String>) -> Result<(), BotError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();
    if token.is_some() {
        config.bot.token = token;
    }
    if channel.is_some() {
        config.bot.channel = channel;
    }

    let mut conn = Connection::from_config(&config)?;
    register_defaults(&mut conn);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;
    rt.block_on(conn.run())
}

fn init_config() -> Result<(), serde_yaml::Error> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
