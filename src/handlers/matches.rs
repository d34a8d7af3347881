use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::database::repositories::MatchRepository;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Only return matches on or after this ISO date.
    pub from: Option<String>,
}

pub async fn get_home_matches(
    match_repo: web::Data<MatchRepository>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse> {
    match match_repo.get_home_matches(query.from.as_deref()).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success(matches))),
        Err(e) => {
            log::error!("Failed to get home matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get home matches")))
        }
    }
}

pub async fn get_away_matches(
    match_repo: web::Data<MatchRepository>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse> {
    match match_repo.get_away_matches(query.from.as_deref()).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success(matches))),
        Err(e) => {
            log::error!("Failed to get away matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get away matches")))
        }
    }
}

pub async fn delete_home_match(
    match_repo: web::Data<MatchRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match match_repo.delete_home_match(path.into_inner()).await {
        Ok(Some(())) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            None,
            "Match deleted",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))),
        Err(e) => {
            log::error!("Failed to delete home match: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete home match")))
        }
    }
}

pub async fn delete_away_match(
    match_repo: web::Data<MatchRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match match_repo.delete_away_match(path.into_inner()).await {
        Ok(Some(())) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            None,
            "Match deleted",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found"))),
        Err(e) => {
            log::error!("Failed to delete away match: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete away match")))
        }
    }
}
