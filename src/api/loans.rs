//! Loan query endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::loan::UserLoanResponse, AppState};

use super::parse_user_id;

/// Get the orders a user currently has on loan
#[utoipa::path(
    get,
    path = "/users/{user_id}/loans",
    tag = "loans",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Active loan orders, empty when there are none", body = Vec<UserLoanResponse>),
        (status = 400, description = "Invalid user ID format", body = crate::error::ErrorResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_active_loans(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<UserLoanResponse>>> {
    let user_id = parse_user_id(&user_id)?;

    let loans = state.services.loans.get_active_loans_by_user_id(user_id).await?;
    Ok(Json(loans))
}
