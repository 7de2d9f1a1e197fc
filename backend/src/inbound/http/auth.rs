//! Auth API handlers.
//!
//! ```text
//! POST /api/auth/register {"username":"door@example.com","password":"hunter2"}
//! POST /api/auth/login {"username":"door@example.com","password":"hunter2"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{Credentials, CredentialsValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{LoginResponse, MessageResponse};
use crate::inbound::http::state::HttpState;

/// Credential request body shared by register and login.
///
/// Fields are optional so a missing key reaches domain validation and yields
/// the validation envelope instead of a deserialisation failure.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct CredentialRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl TryFrom<CredentialRequest> for Credentials {
    type Error = Error;

    fn try_from(value: CredentialRequest) -> Result<Self, Self::Error> {
        let username = value.username.unwrap_or_default();
        let password = value.password.unwrap_or_default();
        Credentials::try_from_parts(&username, &password).map_err(map_validation_error)
    }
}

fn map_validation_error(err: CredentialsValidationError) -> Error {
    let field = match err {
        CredentialsValidationError::EmptyUsername
        | CredentialsValidationError::UsernameTooLong { .. } => "username",
        CredentialsValidationError::EmptyPassword => "password",
    };
    Error::invalid_request("Username and password are required.")
        .with_details(json!({ "field": field, "reason": err.to_string() }))
}

/// Register a new device account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CredentialRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing username or password", body = Error),
        (status = 409, description = "Username already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = Credentials::try_from(payload.into_inner())?;
    let user_id = state.credentials.register(&credentials).await?;
    info!(username = %credentials.username(), %user_id, "user registered");
    Ok(HttpResponse::Created().json(MessageResponse::ok("User registered successfully.")))
}

/// Authenticate a device account.
///
/// Success carries the user id only; no session, cookie, or token is
/// established.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = CredentialRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = Credentials::try_from(payload.into_inner())?;
    let user_id = state.credentials.login(&credentials).await?;
    info!(username = %credentials.username(), %user_id, "user logged in");
    Ok(HttpResponse::Ok().json(LoginResponse::ok(user_id)))
}
