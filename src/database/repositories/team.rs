use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::{
    models::{Team, TeamInput},
    utils::sql,
};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_team(&self, input: TeamInput) -> Result<Team> {
        let now = Utc::now();
        let team = sqlx::query_as::<_, Team>(&sql(r#"
            INSERT INTO
                teams (
                    name,
                    category,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?)
            RETURNING
                id,
                name,
                category,
                created_at,
                updated_at
        "#))
        .bind(input.name)
        .bind(input.category)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn get_team_by_id(&self, id: i64) -> Result<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(&sql(r#"
            SELECT
                id,
                name,
                category,
                created_at,
                updated_at
            FROM
                teams
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn get_all_teams(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&sql(r#"
            SELECT
                id,
                name,
                category,
                created_at,
                updated_at
            FROM
                teams
            ORDER BY
                category,
                name
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn update_team(&self, id: i64, input: TeamInput) -> Result<Option<Team>> {
        let now = Utc::now();
        let team = sqlx::query_as::<_, Team>(&sql(r#"
            UPDATE
                teams
            SET
                name = ?,
                category = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                category,
                created_at,
                updated_at
        "#))
        .bind(input.name)
        .bind(input.category)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn delete_team(&self, id: i64) -> Result<Option<()>> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            Some(())
        } else {
            None
        })
    }
}
