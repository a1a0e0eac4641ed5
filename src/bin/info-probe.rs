use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;

use devops_info_service::config;

#[derive(Parser)]
#[command(name = "info-probe")]
#[command(about = "Probe a running DevOps Info Service", long_about = None)]
struct Cli {
    /// Base URL. Defaults to http://127.0.0.1:$PORT.
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in seconds.
    #[arg(short, long, default_value_t = 3)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exit 0 if /health answers 200, 1 otherwise
    Health,
    /// Print service identity
    Info,
    /// Print resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let base = match cli.url {
        Some(url) => url,
        None => format!("http://127.0.0.1:{}", config::load()?.port),
    };
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .no_proxy()
        .build()?;

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            println!("{} {}", status.as_u16(), body);
            if status.is_success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Commands::Info => {
            let res = client.get(format!("{}/info", base)).send().await?;
            print_response(res).await
        }
        Commands::Config => {
            let res = client.get(format!("{}/config", base)).send().await?;
            print_response(res).await
        }
    }
}

async fn print_response(res: reqwest::Response) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(ExitCode::SUCCESS)
}
