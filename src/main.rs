use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalogo::infrastructure::AppState;
use catalogo::{config, seed, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalogo=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Connect to the key-value store
    let store = match server::connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to connect to store: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(store);

    // Check for seed flag
    if config.seed_demo {
        tracing::info!("Seeding demo data...");
        match seed::seed_demo_data(state.book_repo.as_ref()).await {
            Ok(created) => tracing::info!("Demo data seeded ({} new books).", created),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    }

    let app = server::build_router(state, &config.static_dir);

    if let Err(e) = server::serve(app, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
