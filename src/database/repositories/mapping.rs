use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::{
    models::{DivisionMapping, DivisionMappingInput, MappingWithTeam},
    utils::sql,
};

#[derive(Clone)]
pub struct MappingRepository {
    pool: SqlitePool,
}

impl MappingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fails with a unique-constraint violation when the
    /// (division_text, team_name_text) pair already exists.
    pub async fn create_mapping(&self, input: DivisionMappingInput) -> Result<DivisionMapping> {
        let now = Utc::now();
        let mapping = sqlx::query_as::<_, DivisionMapping>(&sql(r#"
            INSERT INTO
                division_mappings (
                    division_text,
                    team_name_text,
                    team_id,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id,
                division_text,
                team_name_text,
                team_id,
                created_at,
                updated_at
        "#))
        .bind(input.division_text)
        .bind(input.team_name_text)
        .bind(input.team_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(mapping)
    }

    pub async fn get_all_mappings(&self) -> Result<Vec<DivisionMapping>> {
        let mappings = sqlx::query_as::<_, DivisionMapping>(&sql(r#"
            SELECT
                id,
                division_text,
                team_name_text,
                team_id,
                created_at,
                updated_at
            FROM
                division_mappings
            ORDER BY
                division_text,
                team_name_text
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(mappings)
    }

    /// Rules joined with their teams, most specific division text first.
    /// This ordering is what makes rule resolution deterministic when
    /// several rules could match the same row.
    pub async fn get_mappings_with_teams(&self) -> Result<Vec<MappingWithTeam>> {
        let mappings = sqlx::query_as::<_, MappingWithTeam>(&sql(r#"
            SELECT
                m.id,
                m.division_text,
                m.team_name_text,
                m.team_id,
                t.name AS team_name,
                t.category AS team_category
            FROM
                division_mappings m
                INNER JOIN teams t ON m.team_id = t.id
            ORDER BY
                length(m.division_text) DESC,
                m.id
        "#))
        .fetch_all(&self.pool)
        .await?;

        Ok(mappings)
    }

    pub async fn update_mapping(
        &self,
        id: i64,
        input: DivisionMappingInput,
    ) -> Result<Option<DivisionMapping>> {
        let now = Utc::now();
        let mapping = sqlx::query_as::<_, DivisionMapping>(&sql(r#"
            UPDATE
                division_mappings
            SET
                division_text = ?,
                team_name_text = ?,
                team_id = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                division_text,
                team_name_text,
                team_id,
                created_at,
                updated_at
        "#))
        .bind(input.division_text)
        .bind(input.team_name_text)
        .bind(input.team_id)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mapping)
    }

    pub async fn delete_mapping(&self, id: i64) -> Result<Option<()>> {
        let result = sqlx::query("DELETE FROM division_mappings WHERE id = ?")
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
