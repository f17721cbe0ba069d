use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    accounts::{
        dto::{AccountResponse, CreateAccountRequest, EmailQuery, UpdateAccountRequest},
        error::StoreError,
        repo_types::{NewUserAccount, UserAccount, UserAccountPatch},
    },
    state::AppState,
};

pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", post(create_account).get(get_account_by_email))
        .route(
            "/accounts/:id",
            get(get_account).patch(update_account).delete(delete_account),
        )
}

fn reject(err: StoreError) -> (StatusCode, String) {
    let status = match &err {
        StoreError::Validation(_) => StatusCode::BAD_REQUEST,
        StoreError::DuplicateEmail(_) => StatusCode::CONFLICT,
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, err.to_string())
}

#[instrument(skip(state, payload))]
pub async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<(StatusCode, HeaderMap, Json<AccountResponse>), (StatusCode, String)> {
    let account = UserAccount::create(
        &state.db,
        NewUserAccount {
            id: None,
            email: payload.email,
            hashed_password: payload.hashed_password,
            full_name: payload.full_name,
            travel_preferences: payload.travel_preferences,
            created_at: None,
        },
    )
    .await
    .map_err(|e| {
        match &e {
            StoreError::Unavailable(_) => error!(error = %e, "create account failed"),
            _ => warn!(error = %e, "create account rejected"),
        }
        reject(e)
    })?;

    info!(account_id = %account.id, email = %account.email, "account created");

    let mut headers = HeaderMap::new();
    if let Ok(location) = format!("/api/v1/accounts/{}", account.id).parse() {
        headers.insert(axum::http::header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(account.into())))
}

#[instrument(skip(state))]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountResponse>, (StatusCode, String)> {
    let account = UserAccount::get_by_id(&state.db, id).await.map_err(|e| {
        warn!(error = %e, account_id = %id, "get account failed");
        reject(e)
    })?;
    Ok(Json(account.into()))
}

#[instrument(skip(state, query))]
pub async fn get_account_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<AccountResponse>, (StatusCode, String)> {
    let account = UserAccount::get_by_email(&state.db, &query.email)
        .await
        .map_err(|e| {
            warn!(error = %e, "get account by email failed");
            reject(e)
        })?;
    Ok(Json(account.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, (StatusCode, String)> {
    let patch = UserAccountPatch {
        email: payload.email,
        hashed_password: payload.hashed_password,
        full_name: payload.full_name,
        travel_preferences: payload.travel_preferences,
    };

    let account = UserAccount::update(&state.db, id, patch)
        .await
        .map_err(|e| {
            match &e {
                StoreError::Unavailable(_) => error!(error = %e, account_id = %id, "update account failed"),
                _ => warn!(error = %e, account_id = %id, "update account rejected"),
            }
            reject(e)
        })?;

    info!(account_id = %account.id, "account updated");
    Ok(Json(account.into()))
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    UserAccount::delete(&state.db, id).await.map_err(|e| {
        warn!(error = %e, account_id = %id, "delete account failed");
        reject(e)
    })?;

    info!(account_id = %id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
