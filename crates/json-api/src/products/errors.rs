//! Product Errors

use tracing::error;

use catalog_app::products::ProductsServiceError;

use crate::errors::{ApiError, FieldError};

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::NotFound => ApiError::NotFound,
        ProductsServiceError::MissingRequiredData | ProductsServiceError::InvalidData => {
            ApiError::Validation(vec![FieldError::new("body", "invalid product data")])
        }
        ProductsServiceError::Sql(source) => {
            error!("product store failure: {source}");

            ApiError::Internal
        }
    }
}
