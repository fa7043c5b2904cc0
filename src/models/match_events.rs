use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Which score column a goal counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    /// Resolve a team reference against the two sides of a match.
    /// Returns `None` when the team is not playing in it.
    pub fn resolve(home_team: &str, away_team: &str, team_id: &str) -> Option<Self> {
        let team_id = team_id.trim();
        if team_id == home_team {
            Some(TeamSide::Home)
        } else if team_id == away_team {
            Some(TeamSide::Away)
        } else {
            None
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Yellow,
    Red,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Yellow => "yellow",
            CardKind::Red => "red",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PATCH /api/matches/{id}/goals`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    #[serde(deserialize_with = "string_or_number")]
    pub team_id: String,
}

/// Body of the yellow/red card routes.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRequest {
    pub player_id: i32,
    pub minute: i32,
}

impl CardRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.minute < 0 {
            return Err(format!("minute must not be negative, got {}", self.minute));
        }
        Ok(())
    }
}

/// Body of `PATCH /api/matches/{id}/extratime`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ExtraTimeRequest {
    pub minutes: i32,
}

impl ExtraTimeRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.minutes < 0 {
            return Err(format!("minutes must not be negative, got {}", self.minutes));
        }
        Ok(())
    }
}

#[derive(Debug, FromRow, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    pub id: i32,
    pub match_id: i32,
    pub team_id: String,
    pub goals: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CardEvent {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub card_type: String,
    pub minute: i32,
    pub created_at: DateTime<Utc>,
}

// Team references are names, but clients sometimes send them as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TeamRef {
        Name(String),
        Number(i64),
    }

    Ok(match TeamRef::deserialize(deserializer)? {
        TeamRef::Name(name) => name,
        TeamRef::Number(number) => number.to_string(),
    })
}
