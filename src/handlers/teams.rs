use actix_web::{web, HttpResponse, Result};

use crate::database::models::TeamInput;
use crate::database::repositories::TeamRepository;
use crate::handlers::shared::ApiResponse;

pub async fn create_team(
    team_repo: web::Data<TeamRepository>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse> {
    match team_repo.create_team(input.into_inner()).await {
        Ok(team) => Ok(HttpResponse::Created().json(ApiResponse::success(team))),
        Err(e) => {
            log::error!("Failed to create team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create team")))
        }
    }
}

pub async fn get_teams(team_repo: web::Data<TeamRepository>) -> Result<HttpResponse> {
    match team_repo.get_all_teams().await {
        Ok(teams) => Ok(HttpResponse::Ok().json(ApiResponse::success(teams))),
        Err(e) => {
            log::error!("Failed to get teams: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get teams")))
        }
    }
}

pub async fn get_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match team_repo.get_team_by_id(team_id).await {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(ApiResponse::success(team))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Err(e) => {
            log::error!("Failed to get team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get team")))
        }
    }
}

pub async fn update_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<i64>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match team_repo.update_team(team_id, input.into_inner()).await {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(ApiResponse::success(team))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Err(e) => {
            log::error!("Failed to update team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update team")))
        }
    }
}

pub async fn delete_team(
    team_repo: web::Data<TeamRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match team_repo.delete_team(team_id).await {
        Ok(Some(())) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            None,
            "Team deleted",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Err(e) => {
            log::error!("Failed to delete team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete team")))
        }
    }
}
