use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use wisata_api::{ApiState, RestApi};
use wisata_catalog::CatalogLoader;
use wisata_core::{Recommender, RecommenderConfig, DEFAULT_TOP_K};

const DEFAULT_POPULAR: &[&str] = &[
    "Air Terjun Grojogan Sewu",
    "Air Terjun Jumog",
    "Candi Cetho",
    "Kebun Teh Kemuning",
    "Telaga Madirda",
    "Candi Sukuh",
    "The Lawu Park",
    "Bukit Sekipan",
    "The Lawu Fresh",
];

/// A content-based recommender for tourism catalogs
#[derive(Parser, Debug)]
#[command(name = "wisata")]
#[command(about = "Recommend similar catalog items by description", long_about = None)]
struct Args {
    /// Path to the catalog CSV
    #[arg(short, long, default_value = "WK_combination_final.csv")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Recommendations returned per request
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Item shown on the popular listing (repeatable)
    #[arg(long = "popular")]
    popular: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Wisata v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let corpus = CatalogLoader::default().load_path(&args.catalog)?;
    let config = RecommenderConfig {
        top_k: args.top_k,
        ..Default::default()
    };
    let recommender = Arc::new(Recommender::fit(corpus, config)?);
    info!("Model fitted on {} items", recommender.corpus().len());

    let popular = if args.popular.is_empty() {
        DEFAULT_POPULAR.iter().map(|s| s.to_string()).collect()
    } else {
        args.popular
    };
    let state = ApiState::new(recommender, popular);

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async move {
            if let Err(e) = RestApi::start(state, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
