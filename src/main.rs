// main.rs - DISC report generation service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use disc_report::{init_tracing, payload_from_text, server, ReportConfig, ReportPipeline};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "disc-report")]
#[command(about = "Generate DISC behavioral reports through Gemini")]
#[command(version)]
struct Cli {
    /// JSON config file; environment variables still override it
    #[arg(long, global = true, env = "REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve POST /api/generateReport
    Serve {
        /// Address to bind (overrides REPORT_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Generate one report and print it as JSON
    Generate {
        /// Request body JSON or a score text such as "D:85, I:70, S:40, C:30"
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the compiled prompt without calling the provider
    Prompt {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = ReportConfig::load(cli.config.as_deref())?;
    let shutdown = shutdown_token();

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            server::serve(&config, shutdown)
                .await
                .with_context(|| format!("Server on {} failed", config.bind_addr))?;
        }
        Commands::Generate { input } => {
            let payload = read_payload(&input)?;
            let pipeline = ReportPipeline::from_config(&config);
            let report = pipeline.generate_for(&payload, &shutdown).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Prompt { input } => {
            let payload = read_payload(&input)?;
            let pipeline = ReportPipeline::from_config(&config);
            println!("{}", pipeline.compiler().compile(&payload).text);
        }
    }

    Ok(())
}

fn read_payload(path: &Path) -> Result<disc_report::ScorePayload> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(payload_from_text(&content)?)
}

/// Token cancelled on Ctrl-C
fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            trigger.cancel();
        }
    });
    token
}
