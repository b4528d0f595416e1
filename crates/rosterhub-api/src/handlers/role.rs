//! Role CRUD handlers. All routes require authentication.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use rosterhub_core::error::AppError;
use rosterhub_entity::role::{CreateRole, Role, UpdateRole};

use crate::dto::request::{CreateRoleRequest, IdQuery, ListRequest, UpdateRoleRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiResult;
use crate::extractors::AuthAccount;
use crate::state::AppState;

/// POST /api/v1/role/add
pub async fn add(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(req): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Role>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = state
        .role_repo
        .create(&CreateRole {
            name: req.name,
            tag: req.tag,
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(role))))
}

/// GET /api/v1/role/get_by_id?id=...
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<ApiResponse<Role>>> {
    let role = state
        .role_repo
        .find_by_id(query.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Role {} not found", query.id)))?;

    Ok(Json(ApiResponse::ok(role)))
}

/// POST /api/v1/role/get_all
pub async fn get_all(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(req): Json<ListRequest>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<Role>>>> {
    let page = state
        .role_repo
        .find_all(&req.page_request(), &req.order_by, req.order)
        .await?;

    Ok(Json(ApiResponse::ok(page.into())))
}

/// PUT /api/v1/role/update
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<ApiResponse<Role>>> {
    let role = state
        .role_repo
        .update(&UpdateRole {
            id: req.id,
            name: req.name,
            tag: req.tag,
            description: req.description,
        })
        .await?;

    Ok(Json(ApiResponse::ok(role)))
}

/// DELETE /api/v1/role/delete?id=...
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.role_repo.delete(query.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Role deleted successfully",
    ))))
}
