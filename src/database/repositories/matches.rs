use anyhow::Result;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::{
    models::{AwayMatch, AwayMatchInput, HomeMatch, HomeMatchInput},
    utils::sql,
};

#[derive(Clone)]
pub struct MatchRepository {
    pool: SqlitePool,
}

impl MatchRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_home_matches(&self, from_date: Option<&str>) -> Result<Vec<HomeMatch>> {
        let matches = sqlx::query_as::<_, HomeMatch>(&sql(r#"
            SELECT
                id,
                category,
                jersey_home,
                date,
                time,
                meeting_time,
                opponent,
                match_code,
                designation,
                is_featured,
                is_prefilled,
                scorer,
                timekeeper,
                created_at,
                updated_at
            FROM
                otm_matches
            WHERE
                date >= ?
            ORDER BY
                date,
                time
        "#))
        .bind(from_date.unwrap_or(""))
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn get_away_matches(&self, from_date: Option<&str>) -> Result<Vec<AwayMatch>> {
        let matches = sqlx::query_as::<_, AwayMatch>(&sql(r#"
            SELECT
                id,
                team_id,
                match_code,
                date,
                time,
                category,
                opponent,
                location,
                status,
                created_at,
                updated_at
            FROM
                external_matches
            WHERE
                date >= ?
            ORDER BY
                date,
                time
        "#))
        .bind(from_date.unwrap_or(""))
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn delete_home_match(&self, id: i64) -> Result<Option<()>> {
        let result = sqlx::query("DELETE FROM otm_matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }

    pub async fn delete_away_match(&self, id: i64) -> Result<Option<()>> {
        let result = sqlx::query("DELETE FROM external_matches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }

    // Import runs inside one transaction. The dedup check and the insert are
    // separate statements, so both take the caller's transaction handle.

    pub async fn home_match_exists(
        tx: &mut Transaction<'_, Sqlite>,
        date: &str,
        time: &str,
        category: &str,
        opponent: &str,
    ) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(&sql(r#"
            SELECT
                COUNT(*)
            FROM
                otm_matches
            WHERE
                date = ?
                AND time = ?
                AND category = ?
                AND opponent = ?
        "#))
        .bind(date)
        .bind(time)
        .bind(category)
        .bind(opponent)
        .fetch_one(&mut **tx)
        .await?;

        Ok(count > 0)
    }

    pub async fn insert_home_match(
        tx: &mut Transaction<'_, Sqlite>,
        input: &HomeMatchInput,
    ) -> Result<()> {
        let now = Utc::now();
        sqlx::query(&sql(r#"
            INSERT INTO
                otm_matches (
                    category,
                    jersey_home,
                    date,
                    time,
                    meeting_time,
                    opponent,
                    match_code,
                    designation,
                    is_featured,
                    is_prefilled,
                    created_at,
                    updated_at
                )
            VALUES
                (?, 1, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?)
        "#))
        .bind(&input.category)
        .bind(&input.date)
        .bind(&input.time)
        .bind(&input.meeting_time)
        .bind(&input.opponent)
        .bind(&input.match_code)
        .bind(&input.designation)
        .bind(now)
        .bind(now)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    pub async fn away_match_exists(
        tx: &mut Transaction<'_, Sqlite>,
        date: &str,
        time: &str,
        team_id: i64,
        opponent: &str,
    ) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(&sql(r#"
            SELECT
                COUNT(*)
            FROM
                external_matches
            WHERE
                date = ?
                AND time = ?
                AND team_id = ?
                AND opponent = ?
        "#))
        .bind(date)
        .bind(time)
        .bind(team_id)
        .bind(opponent)
        .fetch_one(&mut **tx)
        .await?;

        Ok(count > 0)
    }

    pub async fn insert_away_match(
        tx: &mut Transaction<'_, Sqlite>,
        input: &AwayMatchInput,
    ) -> Result<()> {
        let now = Utc::now();
        sqlx::query(&sql(r#"
            INSERT INTO
                external_matches (
                    team_id,
                    match_code,
                    date,
                    time,
                    category,
                    opponent,
                    location,
                    status,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, 'scheduled', ?, ?)
        "#))
        .bind(input.team_id)
        .bind(&input.match_code)
        .bind(&input.date)
        .bind(&input.time)
        .bind(&input.category)
        .bind(&input.opponent)
        .bind(&input.location)
        .bind(now)
        .bind(now)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
