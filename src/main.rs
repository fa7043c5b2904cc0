use std::net::TcpListener;

use scoreboard_backend::config::settings::get_config;
use scoreboard_backend::db::connection::connect_with_retry;
use scoreboard_backend::telemetry::{get_subscriber, init_subscriber};
use scoreboard_backend::{run, IndexPage};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "scoreboard-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let connection_pool = match connect_with_retry(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(
                "❌ Could not reach the database after {} attempts: {}",
                config.database.connect_attempts, e
            );
            std::process::exit(1);
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("✅ Listening on {}", address);

    run(
        listener,
        connection_pool,
        IndexPage::new(config.application.index_file)
    )?.await
}
