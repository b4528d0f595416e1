//! Account CRUD handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use validator::Validate;

use rosterhub_core::error::AppError;
use rosterhub_entity::account::{CreateAccount, UpdateAccount};
use rosterhub_entity::role::RoleTag;

use crate::dto::request::{CreateAccountRequest, EmailQuery, IdQuery, ListRequest, UpdateAccountRequest};
use crate::dto::response::{AccountResponse, ApiResponse, MessageResponse, PaginatedResponse};
use crate::error::ApiResult;
use crate::extractors::AuthAccount;
use crate::state::AppState;

fn check_password_length(password: &str, min: usize) -> Result<(), AppError> {
    if password.chars().count() < min {
        return Err(AppError::validation(format!(
            "Password must be at least {min} characters"
        )));
    }
    Ok(())
}

/// POST /api/v1/account/add
///
/// Open endpoint: this is how the first account gets created.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<CreateAccountRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AccountResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    check_password_length(&req.password, state.config.auth.password_min_length)?;

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let role = req.role.unwrap_or(RoleTag::User);

    let account = state
        .account_repo
        .create(&CreateAccount {
            name: req.name,
            email: req.email,
            password_hash,
            role: role.as_str().to_string(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(account.into())),
    ))
}

/// GET /api/v1/account/get_by_id?id=...
pub async fn get_by_id(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let account = state
        .account_repo
        .find_by_id(query.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", query.id)))?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// GET /api/v1/account/get_by_email?email=...
pub async fn get_by_email(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let account = state
        .account_repo
        .find_by_email(&query.email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account '{}' not found", query.email)))?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// POST /api/v1/account/get_all
pub async fn get_all(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(req): Json<ListRequest>,
) -> ApiResult<Json<ApiResponse<PaginatedResponse<AccountResponse>>>> {
    let page = state
        .account_repo
        .find_all(&req.page_request(), &req.order_by, req.order)
        .await?;

    let response = PaginatedResponse {
        items: page.items.into_iter().map(AccountResponse::from).collect(),
        page: page.page,
        page_size: page.page_size,
        total_items: page.total_items,
        total_pages: page.total_pages,
    };

    Ok(Json(ApiResponse::ok(response)))
}

/// PUT /api/v1/account/update
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    let password_hash = match req.password.as_deref() {
        Some(password) => {
            check_password_length(password, state.config.auth.password_min_length)?;
            Some(state.password_hasher.hash_password(password)?)
        }
        None => None,
    };

    let account = state
        .account_repo
        .update(&UpdateAccount {
            id: req.id,
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await?;

    Ok(Json(ApiResponse::ok(account.into())))
}

/// DELETE /api/v1/account/delete?id=...
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Query(query): Query<IdQuery>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.account_repo.delete(query.id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Account deleted successfully",
    ))))
}
