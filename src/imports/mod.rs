//! Match-schedule import pipeline: spreadsheet ingestion, team-name
//! matching against the stored mapping rules, and deduplicated inserts
//! into the home/away match tables.

use serde::{Deserialize, Serialize};
use sqlx::{Sqlite, SqlitePool, Transaction};

pub mod datetime;
pub mod normalize;
pub mod resolve;
pub mod sheet;

use crate::database::models::{AwayMatchInput, HomeMatchInput, MappingWithTeam};
use crate::database::repositories::{MappingRepository, MatchRepository};
use crate::error::AppError;
use crate::imports::resolve::{resolve_row, Side};
use crate::imports::sheet::ScheduleRow;

/// Aggregate outcome of one import run.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: u32,
    pub duplicated: u32,
    pub skipped: u32,
    pub duplicate_details: Vec<String>,
}

#[derive(Clone)]
pub struct ScheduleImporter {
    pool: SqlitePool,
}

impl ScheduleImporter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run the full pipeline on an uploaded spreadsheet. The whole batch is
    /// applied inside one transaction: duplicates and unresolved rows are
    /// counted, never errors, while an unexpected persistence failure rolls
    /// the entire run back.
    pub async fn import(&self, bytes: &[u8]) -> Result<ImportSummary, AppError> {
        let rows = sheet::parse_schedule(bytes)?;
        if rows.is_empty() {
            return Err(AppError::BadRequest(
                "Spreadsheet contains no data rows".to_string(),
            ));
        }

        let mappings = MappingRepository::new(self.pool.clone())
            .get_mappings_with_teams()
            .await?;

        let mut tx = self.pool.begin().await?;
        let mut summary = ImportSummary::default();
        for row in &rows {
            self.process_row(&mut tx, &mappings, row, &mut summary)
                .await?;
        }
        tx.commit().await?;

        log::info!(
            "Schedule import finished: {} imported, {} duplicated, {} skipped",
            summary.imported,
            summary.duplicated,
            summary.skipped
        );

        Ok(summary)
    }

    async fn process_row(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        mappings: &[MappingWithTeam],
        row: &ScheduleRow,
        summary: &mut ImportSummary,
    ) -> Result<(), AppError> {
        let resolved = match resolve_row(mappings, &row.division, &row.home, &row.visitor) {
            Some(resolved) => resolved,
            None => {
                summary.skipped += 1;
                return Ok(());
            }
        };

        let (date, time) = match (
            datetime::canonical_date(&row.date),
            datetime::canonical_time(&row.time),
        ) {
            (Some(date), Some(time)) => (date, time),
            _ => {
                log::warn!(
                    "Unreadable date or time in row for '{}', skipping",
                    resolved.mapping.team_name
                );
                summary.skipped += 1;
                return Ok(());
            }
        };

        let team = resolved.mapping;
        match resolved.side {
            Side::Home => {
                let exists = MatchRepository::home_match_exists(
                    tx,
                    &date,
                    &time,
                    &team.team_category,
                    &resolved.opponent,
                )
                .await?;
                if exists {
                    summary.duplicated += 1;
                    summary.duplicate_details.push(descriptor(
                        &team.team_name,
                        &resolved.opponent,
                        &date,
                    ));
                    return Ok(());
                }

                let meeting_time =
                    datetime::meeting_time(&time).unwrap_or_else(|| time.clone());
                MatchRepository::insert_home_match(
                    tx,
                    &HomeMatchInput {
                        category: team.team_category.clone(),
                        date,
                        time,
                        meeting_time,
                        opponent: resolved.opponent,
                        match_code: row.match_code.clone(),
                        designation: row.division.clone(),
                    },
                )
                .await?;
                summary.imported += 1;
            }
            Side::Away => {
                let exists = MatchRepository::away_match_exists(
                    tx,
                    &date,
                    &time,
                    team.team_id,
                    &resolved.opponent,
                )
                .await?;
                if exists {
                    summary.duplicated += 1;
                    summary.duplicate_details.push(descriptor(
                        &team.team_name,
                        &resolved.opponent,
                        &date,
                    ));
                    return Ok(());
                }

                MatchRepository::insert_away_match(
                    tx,
                    &AwayMatchInput {
                        team_id: team.team_id,
                        match_code: row.match_code.clone(),
                        date,
                        time,
                        category: team.team_category.clone(),
                        opponent: resolved.opponent,
                        location: row.location.clone(),
                    },
                )
                .await?;
                summary.imported += 1;
            }
        }

        Ok(())
    }
}

/// Human-readable duplicate descriptor for the import report.
fn descriptor(team: &str, opponent: &str, date: &str) -> String {
    format!("{} · {} · {}", team, opponent, date)
}
