//! Success envelopes shared across handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Plain `{success, message}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    /// Success envelope with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login success envelope carrying the authenticated user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user_id: UserId,
}

impl LoginResponse {
    /// Success envelope for a completed login.
    pub fn ok(user_id: UserId) -> Self {
        Self {
            success: true,
            message: "Login successful.".to_owned(),
            user_id,
        }
    }
}

/// Device state envelope for `GET /api/control/state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateResponse {
    pub success: bool,
    pub current_state: String,
}
