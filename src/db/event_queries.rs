use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use crate::db::QueryError;
use crate::models::match_data::{Match, MatchRow};
use crate::models::match_events::{CardEvent, CardKind, GoalEvent, TeamSide};

/// Goal, card and extra-time writes. Anything touching two tables runs in a
/// single transaction; an early return drops it and rolls back.
#[derive(Debug)]
pub struct EventQueries {
    pool: PgPool,
}

impl EventQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Increment the scoring side's column and append one goal row.
    pub async fn register_goal(&self, match_id: i32, team_id: &str) -> Result<Match, QueryError> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so concurrent goals for the same match serialize.
        let (home_team, away_team) = sqlx::query_as::<_, (String, String)>(
            "SELECT home_team, away_team FROM matches WHERE id = $1 FOR UPDATE",
        )
        .bind(match_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(QueryError::MatchNotFound(match_id))?;

        let side = TeamSide::resolve(&home_team, &away_team, team_id).ok_or_else(|| {
            QueryError::UnknownTeam {
                match_id,
                team: team_id.to_string(),
            }
        })?;

        let update_sql = match side {
            TeamSide::Home => r#"
                UPDATE matches SET score_a = score_a + 1 WHERE id = $1
                RETURNING id, home_team, away_team, score_a, score_b, match_date, extra_time
                "#,
            TeamSide::Away => r#"
                UPDATE matches SET score_b = score_b + 1 WHERE id = $1
                RETURNING id, home_team, away_team, score_a, score_b, match_date, extra_time
                "#,
        };
        let row = sqlx::query_as::<_, MatchRow>(update_sql)
            .bind(match_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO goals (match_id, team_id, goals) VALUES ($1, $2, 1)")
            .bind(match_id)
            .bind(team_id.trim())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Goal for {:?} side in match {}: {} - {}", side, match_id, row.score_a, row.score_b);
        Ok(row.into())
    }

    /// Append a card row. Fails with `MatchNotFound` when the match is absent.
    pub async fn register_card(
        &self,
        match_id: i32,
        player_id: i32,
        minute: i32,
        kind: CardKind,
    ) -> Result<CardEvent, QueryError> {
        let card = sqlx::query_as::<_, CardEvent>(
            r#"
            INSERT INTO cards (match_id, player_id, card_type, minute)
            SELECT id, $2, $3, $4 FROM matches WHERE id = $1
            RETURNING id, match_id, player_id, card_type, minute, created_at
            "#,
        )
        .bind(match_id)
        .bind(player_id)
        .bind(kind.as_str())
        .bind(minute)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(QueryError::MatchNotFound(match_id))?;

        info!("{} card for player {} in match {} at minute {}", kind, player_id, match_id, minute);
        Ok(card)
    }

    /// Set the match column and upsert the single extra-time row.
    pub async fn set_extra_time(&self, match_id: i32, minutes: i32) -> Result<Match, QueryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, MatchRow>(
            r#"
            UPDATE matches SET extra_time = $2 WHERE id = $1
            RETURNING id, home_team, away_team, score_a, score_b, match_date, extra_time
            "#,
        )
        .bind(match_id)
        .bind(minutes)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(QueryError::MatchNotFound(match_id))?;

        sqlx::query(
            r#"
            INSERT INTO extra_time (match_id, minutes)
            VALUES ($1, $2)
            ON CONFLICT (match_id) DO UPDATE SET minutes = EXCLUDED.minutes
            "#,
        )
        .bind(match_id)
        .bind(minutes)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Extra time for match {} set to {} minutes", match_id, minutes);
        Ok(row.into())
    }

    pub async fn list_goals(&self, match_id: i32) -> Result<Vec<GoalEvent>, QueryError> {
        let mut tx = self.pool.begin().await?;
        ensure_match_exists(&mut tx, match_id).await?;

        let goals = sqlx::query_as::<_, GoalEvent>(
            r#"
            SELECT id, match_id, team_id, goals, created_at
            FROM goals
            WHERE match_id = $1
            ORDER BY id
            "#,
        )
        .bind(match_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(goals)
    }

    pub async fn list_cards(&self, match_id: i32) -> Result<Vec<CardEvent>, QueryError> {
        let mut tx = self.pool.begin().await?;
        ensure_match_exists(&mut tx, match_id).await?;

        let cards = sqlx::query_as::<_, CardEvent>(
            r#"
            SELECT id, match_id, player_id, card_type, minute, created_at
            FROM cards
            WHERE match_id = $1
            ORDER BY id
            "#,
        )
        .bind(match_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(cards)
    }
}

async fn ensure_match_exists(
    tx: &mut Transaction<'_, Postgres>,
    match_id: i32,
) -> Result<(), QueryError> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM matches WHERE id = $1)")
        .bind(match_id)
        .fetch_one(&mut **tx)
        .await?;

    if exists {
        Ok(())
    } else {
        Err(QueryError::MatchNotFound(match_id))
    }
}
