use secrecy::ExposeSecret;
use serde_json::{json, Value};
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use scoreboard_backend::{run, IndexPage};
use scoreboard_backend::config::settings::{get_config, DatabaseSettings};
use scoreboard_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub address: String,
    pub db_pool: PgPool
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    // A DATABASE_URL from the environment would point every test at the same database
    configuration.database.db_url = None;
    let connection_pool = configure_db(&configuration.database)
        .await;
    let server = run(
        listener,
        connection_pool.clone(),
        IndexPage::new(configuration.application.index_file),
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            config.connection_string_without_db().expose_secret()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Create a match through the API and return the created object.
pub async fn create_match(app_address: &str, home_team: &str, away_team: &str) -> Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/api/matches", app_address))
        .json(&json!({
            "homeTeam": home_team,
            "awayTeam": away_team,
            "scoreA": 0,
            "scoreB": 0,
            "matchDate": "2024-05-01"
        }))
        .send()
        .await
        .expect("Failed to create match.");

    assert!(response.status().is_success(), "Match creation should succeed");
    response.json().await.expect("Failed to parse created match")
}

pub async fn get_match(app_address: &str, match_id: i64) -> Value {
    let response = Client::new()
        .get(&format!("{}/api/matches/{}", app_address, match_id))
        .send()
        .await
        .expect("Failed to fetch match.");

    assert!(response.status().is_success(), "Match {} should exist", match_id);
    response.json().await.expect("Failed to parse match")
}
