use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::config::settings::DatabaseSettings;

/// Open the process-wide pool, retrying a fixed number of times with a fixed
/// pause in between. The last connection error is returned once all attempts
/// are used up.
pub async fn connect_with_retry(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let attempts = settings.connect_attempts.max(1);
    let options = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout())
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800));
    let connection_string = settings.connection_string();

    let mut attempt = 1;
    loop {
        match options.clone().connect(connection_string.expose_secret()).await {
            Ok(pool) => {
                info!("Connected to the database on attempt {}/{}", attempt, attempts);
                return Ok(pool);
            }
            Err(e) if attempt >= attempts => {
                error!("Database connection attempt {}/{} failed: {}", attempt, attempts, e);
                return Err(e);
            }
            Err(e) => {
                warn!(
                    "Database connection attempt {}/{} failed: {}. Retrying in {}s",
                    attempt, attempts, e, settings.retry_interval_seconds
                );
                tokio::time::sleep(settings.retry_interval()).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::time::Instant;

    #[tokio::test]
    async fn test_gives_up_after_configured_attempts() {
        let settings = DatabaseSettings {
            user: "nobody".into(),
            password: SecretString::new("nothing".to_string().into_boxed_str()),
            // Nothing listens on port 1, every attempt is refused until the acquire timeout.
            port: 1,
            host: "127.0.0.1".into(),
            db_name: "missing".into(),
            db_url: None,
            max_connections: 1,
            connect_attempts: 3,
            retry_interval_seconds: 0,
            acquire_timeout_seconds: 1,
        };

        let started = Instant::now();
        let result = connect_with_retry(&settings).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(30));
    }
}
