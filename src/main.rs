use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::app::Pokedex;
use pokedex::config::Config;
use pokedex::state::store::LocalStore;

fn main() -> iced::Result {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    report_local_store(&config);

    iced::application("Pokédex", Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .centered()
        .run_with(move || Pokedex::new(config))
}

/// Open the local table once so a broken database shows up in the logs.
/// The screens never touch it.
fn report_local_store(config: &Config) {
    match LocalStore::open(&config.db_path).and_then(|store| store.count()) {
        Ok(count) => tracing::info!("Local table holds {} rows", count),
        Err(e) => tracing::warn!("Local database unavailable: {}", e),
    }
}
