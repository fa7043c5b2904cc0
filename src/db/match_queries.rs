use sqlx::PgPool;
use tracing::{debug, info};

use crate::db::QueryError;
use crate::models::match_data::{Match, MatchRow, NewMatch};

#[derive(Debug)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_matches(&self) -> Result<Vec<Match>, QueryError> {
        let rows = sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, home_team, away_team, score_a, score_b, match_date, extra_time
            FROM matches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} matches", rows.len());
        Ok(rows.into_iter().map(Match::from).collect())
    }

    pub async fn get_match(&self, match_id: i32) -> Result<Match, QueryError> {
        sqlx::query_as::<_, MatchRow>(
            r#"
            SELECT id, home_team, away_team, score_a, score_b, match_date, extra_time
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await?
        .map(Match::from)
        .ok_or(QueryError::MatchNotFound(match_id))
    }

    pub async fn create_match(&self, new_match: &NewMatch) -> Result<Match, QueryError> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            INSERT INTO matches (home_team, away_team, score_a, score_b, match_date, extra_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, home_team, away_team, score_a, score_b, match_date, extra_time
            "#,
        )
        .bind(&new_match.home_team)
        .bind(&new_match.away_team)
        .bind(new_match.score_a)
        .bind(new_match.score_b)
        .bind(new_match.match_date)
        .bind(new_match.extra_time)
        .fetch_one(&self.pool)
        .await?;

        info!("Created match {}: {} vs {}", row.id, row.home_team, row.away_team);
        Ok(row.into())
    }

    /// Overwrite every column of an existing match.
    pub async fn update_match(&self, match_id: i32, new_match: &NewMatch) -> Result<Match, QueryError> {
        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            UPDATE matches
            SET
                home_team = $2,
                away_team = $3,
                score_a = $4,
                score_b = $5,
                match_date = $6,
                extra_time = $7
            WHERE id = $1
            RETURNING id, home_team, away_team, score_a, score_b, match_date, extra_time
            "#,
        )
        .bind(match_id)
        .bind(&new_match.home_team)
        .bind(&new_match.away_team)
        .bind(new_match.score_a)
        .bind(new_match.score_b)
        .bind(new_match.match_date)
        .bind(new_match.extra_time)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(QueryError::MatchNotFound(match_id))?;

        info!("Updated match {}", match_id);
        Ok(row.into())
    }

    /// Delete a match. Its goal, card and extra-time rows go with it.
    pub async fn delete_match(&self, match_id: i32) -> Result<(), QueryError> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(QueryError::MatchNotFound(match_id));
        }

        info!("Deleted match {}", match_id);
        Ok(())
    }
}
