//! `ytchat`: print a stream's live chat to stdout until Ctrl-C.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ytchat_rs::{ChatBacklog, ConfigStore, Host, ScraperService, YtClient, YtError};

#[derive(Parser, Debug)]
#[command(name = "ytchat", about = "Harvest YouTube live chat to stdout")]
struct Args {
    /// TOML file holding `chatUrl`.
    #[arg(long, default_value = "ytchat-client.toml")]
    config: PathBuf,

    /// Stream URL to use. Saved to the config file.
    #[arg(long)]
    url: Option<String>,

    /// One JSON object per line instead of `author: text`.
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact(),
    );

    // Only fails if a global subscriber is already set.
    let _ = subscriber.try_init();
}

#[tokio::main]
async fn main() -> Result<(), YtError> {
    let args = Args::parse();
    init_logging();

    let config = ConfigStore::load(&args.config)?;
    if let Some(url) = args.url.as_deref() {
        config.set_url(url)?;
    }

    let service = ScraperService::new(YtClient::builder().build()?);
    let mut host = Host::start(service, &config).await;
    let queue = host.queue();
    let mut backlog = ChatBacklog::default();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        for msg in backlog.pump(&queue) {
            if args.json {
                match serde_json::to_string(&msg) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::warn!("could not encode message: {e}"),
                }
            } else {
                println!("{}: {}", msg.author(), msg.text());
            }
        }

        // More than one frame's worth may be waiting.
        if !queue.is_empty() {
            continue;
        }

        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = queue.notified() => {}
        }
    }

    tracing::info!("interrupted, shutting down");
    host.shutdown().await;
    Ok(())
}
