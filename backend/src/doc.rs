//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API: auth, device control, and health probe endpoints plus the shared
//! request/response schemas. The generated specification backs Swagger UI in
//! debug builds.

use utoipa::OpenApi;

use crate::domain::device::DeviceCommand;
use crate::domain::error::{Error, ErrorCode};
use crate::domain::user::{UserId, Username};
use crate::inbound::http::auth::CredentialRequest;
use crate::inbound::http::control::ControlRequest;
use crate::inbound::http::responses::{LoginResponse, MessageResponse, StateResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lockpanel backend API",
        description = "Device registration, login, and lock control relay."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::control::control_device,
        crate::inbound::http::control::device_state,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        DeviceCommand,
        UserId,
        Username,
        CredentialRequest,
        ControlRequest,
        MessageResponse,
        LoginResponse,
        StateResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn document_lists_all_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/control",
            "/api/control/state",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing path {expected}, got {paths:?}"
            );
        }
    }
}
