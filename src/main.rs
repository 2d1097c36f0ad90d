use clap::Parser;
use igbo_lookup::cache::memory::MemoryCache;
use igbo_lookup::config::Config;
use igbo_lookup::server::{Services, router};
use igbo_lookup::storage::memory::MemoryWordStore;
use igbo_lookup::words::types::NewWord;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "igbo-lookup", about = "Igbo/English dictionary lookup service")]
struct Cli {
    /// Address to serve HTTP on. Overrides `[server] bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of word payloads to load at startup.
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let bind_addr: SocketAddr = match cli.bind {
        Some(addr) => addr,
        None => config.server.bind.parse()?,
    };

    // 1. Collaborators:
    let store = Arc::new(MemoryWordStore::new());
    let cache = Arc::new(MemoryCache::new());
    let services = Services::new(&config, store.clone(), cache);

    // 2. Seed data:
    if let Some(path) = cli.seed {
        let raw = tokio::fs::read_to_string(&path).await?;
        let words: Vec<NewWord> = serde_json::from_str(&raw)?;
        for word in words {
            services.words.create_word(word).await?;
        }
        tracing::info!(
            "Seeded {} words and {} examples from {}",
            store.word_count(),
            store.example_count(),
            path.display()
        );
    }

    tracing::info!(
        "Cache ttl={:?} timeout={:?}",
        config.cache.ttl(),
        config.cache.timeout()
    );

    // 3. HTTP Router:
    let app = router(services);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
