//! Toggle Product Availability Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use catalog_app::products::records::ProductId;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, get::ProductDataResponse},
    state::State,
};

/// Toggle Product Availability Handler
///
/// Flips the availability of a product and returns the stored result.
#[endpoint(tags("products"), summary = "Toggle Product Availability")]
#[tracing::instrument(
    name = "products.availability",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(product));

    let updated = state
        .app
        .products
        .toggle_availability(product)
        .await
        .map_err(into_api_error)?;

    tracing::info!(
        product_id = %product,
        availability = updated.availability,
        "toggled product availability"
    );

    Ok(Json(updated.into()))
}
