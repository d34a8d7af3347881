use anyhow::Result;
use sqlx::SqlitePool;
use tempfile::TempDir;

use club_be::database::init_database;
use club_be::database::models::{DivisionMapping, DivisionMappingInput, Team, TeamInput};
use club_be::database::repositories::{MappingRepository, TeamRepository};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

#[allow(dead_code)]
pub async fn seed_team(pool: &SqlitePool, name: &str, category: &str) -> Result<Team> {
    TeamRepository::new(pool.clone())
        .create_team(TeamInput {
            name: name.to_string(),
            category: category.to_string(),
        })
        .await
}

#[allow(dead_code)]
pub async fn seed_mapping(
    pool: &SqlitePool,
    division_text: &str,
    team_name_text: &str,
    team_id: i64,
) -> Result<DivisionMapping> {
    MappingRepository::new(pool.clone())
        .create_mapping(DivisionMappingInput {
            division_text: division_text.to_string(),
            team_name_text: team_name_text.to_string(),
            team_id,
        })
        .await
}
