pub mod connection;
pub mod event_queries;
pub mod helpers;
pub mod match_queries;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Match {0} not found")]
    MatchNotFound(i32),

    #[error("Team `{team}` is not playing in match {match_id}")]
    UnknownTeam { match_id: i32, team: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
