//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, loans, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lending API",
        version = "1.0.0",
        description = "Item borrowing management REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        health::health_check,
        health::system_status,
        users::create_user,
        users::get_user,
        loans::get_user_active_loans,
    ),
    components(
        schemas(
            health::HealthResponse,
            health::StatusResponse,
            crate::models::user::CreateUser,
            crate::models::user::UserResponse,
            crate::models::loan::UserLoanResponse,
            crate::models::loan::LoanItemDetail,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and status endpoints"),
        (name = "users", description = "User management"),
        (name = "loans", description = "Active loan queries")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
