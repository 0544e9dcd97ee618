// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// `{"message": "..."}` used by most endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User does not exist.")]
    pub message: String,
}

/// `{"error": "..."}` returned for a bad social provider request
#[derive(Serialize, ToSchema)]
pub struct ErrorMessageResponse {
    #[schema(example = "Please provide a valid social provider")]
    pub error: String,
}

/// `{"errors": ...}`: a field map such as `{"email": ["..."]}` or a single string
#[derive(Serialize, ToSchema)]
pub struct ErrorsResponse {
    #[schema(value_type = Object, example = json!({"email": ["user with this email already exists."]}))]
    pub errors: serde_json::Value,
}
