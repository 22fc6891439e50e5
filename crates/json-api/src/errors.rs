//! HTTP error responses.
//!
//! Every failure leaves a handler as an [`ApiError`], which renders one of
//! three JSON shapes:
//!
//! - `400 {"errors": [{"field": ..., "message": ...}]}`
//! - `404 {"error": "Producto No Encontrado"}`
//! - `500 {"error": "Internal Server Error"}`

use salvo::{
    oapi::{self, Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const NOT_FOUND_MESSAGE: &str = "Producto No Encontrado";
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct FieldError {
    /// Name of the offending path parameter or body field
    pub field: String,

    /// Human readable reason
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Validation Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ValidationErrorResponse {
    /// Every failed rule, in declaration order
    pub errors: Vec<FieldError>,
}

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    #[error("product not found")]
    NotFound,

    #[error("internal server error")]
    Internal,
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        match self {
            Self::Validation(errors) => {
                res.status_code(StatusCode::BAD_REQUEST);
                res.render(Json(ValidationErrorResponse { errors }));
            }
            Self::NotFound => {
                res.status_code(StatusCode::NOT_FOUND);
                res.render(Json(ErrorResponse {
                    error: NOT_FOUND_MESSAGE.to_owned(),
                }));
            }
            Self::Internal => {
                res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                res.render(Json(ErrorResponse {
                    error: INTERNAL_ERROR_MESSAGE.to_owned(),
                }));
            }
        }
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        operation.responses.insert(
            StatusCode::BAD_REQUEST.as_str(),
            oapi::Response::new("Bad Request - invalid input")
                .add_content(
                    "application/json",
                    Content::new(ValidationErrorResponse::to_schema(components)),
                ),
        );
        operation.responses.insert(
            StatusCode::NOT_FOUND.as_str(),
            oapi::Response::new("Product not found")
                .add_content(
                    "application/json",
                    Content::new(ErrorResponse::to_schema(components)),
                ),
        );
        operation.responses.insert(
            StatusCode::INTERNAL_SERVER_ERROR.as_str(),
            oapi::Response::new("Internal Server Error")
                .add_content(
                    "application/json",
                    Content::new(ErrorResponse::to_schema(components)),
                ),
        );
    }
}
