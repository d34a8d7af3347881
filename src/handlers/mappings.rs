use actix_web::{web, HttpResponse, Result};

use crate::database::models::DivisionMappingInput;
use crate::database::repositories::MappingRepository;
use crate::handlers::shared::ApiResponse;

fn is_unique_violation(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation()
    )
}

pub async fn create_mapping(
    mapping_repo: web::Data<MappingRepository>,
    input: web::Json<DivisionMappingInput>,
) -> Result<HttpResponse> {
    match mapping_repo.create_mapping(input.into_inner()).await {
        Ok(mapping) => Ok(HttpResponse::Created().json(ApiResponse::success(mapping))),
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("A mapping for this division and team text already exists"),
        )),
        Err(e) => {
            log::error!("Failed to create mapping: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create mapping")))
        }
    }
}

pub async fn get_mappings(mapping_repo: web::Data<MappingRepository>) -> Result<HttpResponse> {
    match mapping_repo.get_all_mappings().await {
        Ok(mappings) => Ok(HttpResponse::Ok().json(ApiResponse::success(mappings))),
        Err(e) => {
            log::error!("Failed to get mappings: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to get mappings")))
        }
    }
}

pub async fn update_mapping(
    mapping_repo: web::Data<MappingRepository>,
    path: web::Path<i64>,
    input: web::Json<DivisionMappingInput>,
) -> Result<HttpResponse> {
    let mapping_id = path.into_inner();

    match mapping_repo
        .update_mapping(mapping_id, input.into_inner())
        .await
    {
        Ok(Some(mapping)) => Ok(HttpResponse::Ok().json(ApiResponse::success(mapping))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Mapping not found")))
        }
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::<()>::error("A mapping for this division and team text already exists"),
        )),
        Err(e) => {
            log::error!("Failed to update mapping: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update mapping")))
        }
    }
}

pub async fn delete_mapping(
    mapping_repo: web::Data<MappingRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let mapping_id = path.into_inner();

    match mapping_repo.delete_mapping(mapping_id).await {
        Ok(Some(())) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_message(
            None,
            "Mapping deleted",
        ))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Mapping not found")))
        }
        Err(e) => {
            log::error!("Failed to delete mapping: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete mapping")))
        }
    }
}
