use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use askdaniel::connector::api::router;
use askdaniel::{Container, ContainerConfig, Question};

#[derive(Parser)]
#[command(name = "askdaniel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true)]
    model: Option<String>,

    #[arg(long, global = true)]
    max_new_tokens: Option<u32>,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[arg(long, global = true)]
    mock_generator: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Serve {
        #[arg(short, long, default_value = "127.0.0.1:8000")]
        bind: String,
    },

    Ask {
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_new_tokens) = cli.max_new_tokens {
        config.max_new_tokens = max_new_tokens;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    config.mock_generator = cli.mock_generator;

    let container = Arc::new(Container::new(config)?);

    match cli.command {
        Commands::Serve { bind } => {
            router::serve(container, &bind).await?;
        }

        Commands::Ask { question } => {
            let use_case = container.ask_use_case();
            let answer = use_case.execute(&Question::new(question)).await;
            println!("{}", answer.text());
        }
    }

    Ok(())
}
