//! Device control handlers relaying panel commands to the lock endpoint.
//!
//! ```text
//! POST /api/control {"command":"lock"}
//! GET /api/control/state
//! ```
//!
//! Device failures pass the device's status code through unchanged; only
//! transport and decode failures get a status of their own (502), because the
//! device never answered with one.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::{DeviceCommand, Error};
use crate::domain::ports::DeviceRelayError;
use crate::inbound::http::ApiResult;
use crate::inbound::http::responses::{MessageResponse, StateResponse};
use crate::inbound::http::state::HttpState;

/// Control request body for `POST /api/control`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct ControlRequest {
    #[serde(default)]
    pub command: Option<String>,
}

fn parse_command(payload: ControlRequest) -> Result<DeviceCommand, Error> {
    let raw = payload.command.unwrap_or_default();
    DeviceCommand::parse(&raw).ok_or_else(|| {
        Error::invalid_request("Invalid command.").with_details(json!({ "command": raw }))
    })
}

fn relay_failure_response(error: &DeviceRelayError) -> HttpResponse {
    warn!(error = %error, "device relay failed");
    match error {
        DeviceRelayError::Device { status, message } => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).json(json!({
                "success": false,
                "code": "device_error",
                "message": message,
            }))
        }
        DeviceRelayError::Transport { .. } => HttpResponse::BadGateway().json(json!({
            "success": false,
            "code": "bad_gateway",
            "message": "Failed to connect to the device.",
        })),
        DeviceRelayError::Decode { .. } => HttpResponse::BadGateway().json(json!({
            "success": false,
            "code": "bad_gateway",
            "message": "Device returned an unreadable response.",
        })),
    }
}

/// Relay a lock/unlock command to the device.
#[utoipa::path(
    post,
    path = "/api/control",
    request_body = ControlRequest,
    responses(
        (status = 200, description = "Device acknowledged the command", body = MessageResponse),
        (status = 400, description = "Unknown command", body = Error),
        (status = 502, description = "Device unreachable", body = Error)
    ),
    tags = ["control"],
    operation_id = "controlDevice"
)]
#[post("/control")]
pub async fn control_device(
    state: web::Data<HttpState>,
    payload: web::Json<ControlRequest>,
) -> ApiResult<HttpResponse> {
    let command = parse_command(payload.into_inner())?;
    info!(%command, "relaying device command");
    match state.relay.send_command(command).await {
        Ok(()) => Ok(HttpResponse::Ok().json(MessageResponse::ok(command.success_message()))),
        Err(error) => Ok(relay_failure_response(&error)),
    }
}

/// Read the device's current lock state.
#[utoipa::path(
    get,
    path = "/api/control/state",
    responses(
        (status = 200, description = "Current device state", body = StateResponse),
        (status = 502, description = "Device unreachable", body = Error)
    ),
    tags = ["control"],
    operation_id = "deviceState"
)]
#[get("/control/state")]
pub async fn device_state(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    match state.relay.fetch_state().await {
        Ok(device) => Ok(HttpResponse::Ok().json(StateResponse {
            success: true,
            current_state: device.current_state,
        })),
        Err(error) => Ok(relay_failure_response(&error)),
    }
}
