use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A match hosted at the club's own venue. The club supplies the table
/// officials, hence the historical "otm_matches" table name.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HomeMatch {
    pub id: i64,
    pub category: String,
    pub jersey_home: bool,
    pub date: String,
    pub time: String,
    pub meeting_time: String,
    pub opponent: String,
    pub match_code: String,
    pub designation: String,
    pub is_featured: bool,
    pub is_prefilled: bool,
    pub scorer: Option<String>,
    pub timekeeper: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeMatchInput {
    pub category: String,
    pub date: String,
    pub time: String,
    pub meeting_time: String,
    pub opponent: String,
    pub match_code: String,
    pub designation: String,
}

/// A match played at an opponent's venue.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AwayMatch {
    pub id: i64,
    pub team_id: i64,
    pub match_code: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub opponent: String,
    pub location: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwayMatchInput {
    pub team_id: i64,
    pub match_code: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub opponent: String,
    pub location: String,
}
