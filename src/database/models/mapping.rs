use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rule associating spreadsheet vocabulary with an internal team.
/// `division_text` is matched as a substring of a row's division label,
/// `team_name_text` as a substring of the home/visitor cells.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DivisionMapping {
    pub id: i64,
    pub division_text: String,
    pub team_name_text: String,
    pub team_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionMappingInput {
    pub division_text: String,
    pub team_name_text: String,
    pub team_id: i64,
}

/// Mapping rule joined with its team, as consumed by the import pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MappingWithTeam {
    pub id: i64,
    pub division_text: String,
    pub team_name_text: String,
    pub team_id: i64,
    pub team_name: String,
    pub team_category: String,
}
