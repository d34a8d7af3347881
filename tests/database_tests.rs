use pretty_assertions::assert_eq;

use club_be::database::models::{DivisionMappingInput, TeamInput};
use club_be::database::repositories::{MappingRepository, TeamRepository};

mod common;

#[tokio::test]
async fn test_create_and_get_team() {
    let db = common::TestDb::new().await.unwrap();
    let repo = TeamRepository::new(db.pool.clone());

    let team = repo
        .create_team(TeamInput {
            name: "Seclin U13".to_string(),
            category: "U13".to_string(),
        })
        .await
        .unwrap();

    let found = repo.get_team_by_id(team.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Seclin U13");
    assert_eq!(found.category, "U13");
}

#[tokio::test]
async fn test_update_team() {
    let db = common::TestDb::new().await.unwrap();
    let repo = TeamRepository::new(db.pool.clone());

    let team = common::seed_team(&db.pool, "Seclin U13", "U13").await.unwrap();

    let updated = repo
        .update_team(
            team.id,
            TeamInput {
                name: "Seclin U15".to_string(),
                category: "U15".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, team.id);
    assert_eq!(updated.name, "Seclin U15");
    assert_eq!(updated.category, "U15");
}

#[tokio::test]
async fn test_delete_team() {
    let db = common::TestDb::new().await.unwrap();
    let repo = TeamRepository::new(db.pool.clone());

    let team = common::seed_team(&db.pool, "Seclin U13", "U13").await.unwrap();

    assert!(repo.delete_team(team.id).await.unwrap().is_some());
    assert!(repo.get_team_by_id(team.id).await.unwrap().is_none());

    // Second delete finds nothing
    assert!(repo.delete_team(team.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_mapping() {
    let db = common::TestDb::new().await.unwrap();
    let repo = MappingRepository::new(db.pool.clone());

    let team = common::seed_team(&db.pool, "Seclin U13", "U13").await.unwrap();

    let mapping = repo
        .create_mapping(DivisionMappingInput {
            division_text: "U13".to_string(),
            team_name_text: "Seclin".to_string(),
            team_id: team.id,
        })
        .await
        .unwrap();

    assert_eq!(mapping.division_text, "U13");
    assert_eq!(mapping.team_name_text, "Seclin");
    assert_eq!(mapping.team_id, team.id);
}

#[tokio::test]
async fn test_duplicate_mapping_is_rejected() {
    let db = common::TestDb::new().await.unwrap();
    let repo = MappingRepository::new(db.pool.clone());

    let team = common::seed_team(&db.pool, "Seclin U13", "U13").await.unwrap();

    common::seed_mapping(&db.pool, "U13", "Seclin", team.id)
        .await
        .unwrap();

    let second = repo
        .create_mapping(DivisionMappingInput {
            division_text: "U13".to_string(),
            team_name_text: "Seclin".to_string(),
            team_id: team.id,
        })
        .await;

    assert!(second.is_err());
}

#[tokio::test]
async fn test_mappings_with_teams_are_ordered_most_specific_first() {
    let db = common::TestDb::new().await.unwrap();
    let repo = MappingRepository::new(db.pool.clone());

    let team = common::seed_team(&db.pool, "Seclin U13", "U13").await.unwrap();

    common::seed_mapping(&db.pool, "U13", "Seclin", team.id)
        .await
        .unwrap();
    common::seed_mapping(&db.pool, "U13 Poule A", "Seclin", team.id)
        .await
        .unwrap();

    let mappings = repo.get_mappings_with_teams().await.unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].division_text, "U13 Poule A");
    assert_eq!(mappings[1].division_text, "U13");
    assert_eq!(mappings[0].team_name, "Seclin U13");
    assert_eq!(mappings[0].team_category, "U13");
}
