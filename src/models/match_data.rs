use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Match as exposed over the API. `match_date` is always `YYYY-MM-DD`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub score_a: i32,
    pub score_b: i32,
    pub match_date: String,
    pub extra_time: i32,
}

/// Row of the `matches` table.
#[derive(Debug, FromRow, Clone)]
pub struct MatchRow {
    pub id: i32,
    pub home_team: String,
    pub away_team: String,
    pub score_a: i32,
    pub score_b: i32,
    pub match_date: NaiveDateTime,
    pub extra_time: i32,
}

impl From<MatchRow> for Match {
    fn from(row: MatchRow) -> Self {
        Self {
            id: row.id,
            home_team: row.home_team,
            away_team: row.away_team,
            score_a: row.score_a,
            score_b: row.score_b,
            match_date: format_match_date(&row.match_date),
            extra_time: row.extra_time,
        }
    }
}

/// Body of POST and PUT. Missing numeric fields fall back to zero.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRequest {
    pub home_team: String,
    pub away_team: String,
    pub score_a: i32,
    pub score_b: i32,
    pub match_date: Option<String>,
    pub extra_time: i32,
}

/// A match request whose date has been parsed, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub home_team: String,
    pub away_team: String,
    pub score_a: i32,
    pub score_b: i32,
    pub match_date: NaiveDateTime,
    pub extra_time: i32,
}

impl TryFrom<MatchRequest> for NewMatch {
    type Error = String;

    fn try_from(request: MatchRequest) -> Result<Self, Self::Error> {
        let raw_date = request
            .match_date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
            .ok_or_else(|| "matchDate is required".to_string())?;
        let match_date = parse_match_date(raw_date)
            .ok_or_else(|| format!("matchDate `{}` is not a valid date", raw_date))?;

        Ok(Self {
            home_team: request.home_team,
            away_team: request.away_team,
            score_a: request.score_a,
            score_b: request.score_b,
            match_date,
            extra_time: request.extra_time,
        })
    }
}

/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.f]]`, `YYYY-MM-DD HH:MM[:SS[.f]]` and plain `YYYY-MM-DD`.
/// An offset is dropped and the wall-clock time kept, as a `TIMESTAMP` column does.
pub fn parse_match_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }
    for format in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// The stored timestamp truncated to its date part.
pub fn format_match_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
