//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::{data::ProductUpdate, records::ProductId};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, get::ProductDataResponse},
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub price: f64,

    /// Left unchanged when omitted
    #[serde(default)]
    pub availability: Option<bool>,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            price: request.price,
            availability: request.availability,
        }
    }
}

/// Product Update Handler
///
/// Overwrites the name and price of a product, and its availability when given.
#[endpoint(tags("products"), summary = "Update Product")]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot),
    fields(
        product_id = tracing::field::Empty,
        price = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let product = ProductId::from_i64(id.into_inner());

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(product));
    span.record("price", tracing::field::display(request.price));

    let updated = state
        .app
        .products
        .update_product(product, request.into())
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}
