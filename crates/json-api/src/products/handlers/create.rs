//! Create Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::data::NewProduct;

use crate::{
    errors::ApiError,
    extensions::*,
    products::{errors::into_api_error, get::ProductDataResponse},
    state::State,
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_api_error)?;

    tracing::Span::current().record("product_id", tracing::field::display(product.id));
    tracing::info!(product_id = %product.id, price = product.price, "created product");

    res.status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::products::{MockProductsService, ProductsServiceError, records::ProductId};

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let product = make_product(ProductId::from_i64(1));

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Monitor".to_string(),
                    price: 300.0,
                }
            })
            .return_once(move |_| Ok(product));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Monitor", "price": 300 }))
            .send(&products_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body["data"]["id"], json!(1));
        assert_eq!(body["data"]["availability"], json!(true));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_invalid_body_returns_400_without_store_call() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "", "price": "300" }))
            .send(&products_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            json!({
                "errors": [
                    { "field": "name", "message": "name is required" },
                    { "field": "price", "message": "price must be a number" },
                    { "field": "price", "message": "price must be greater than zero" },
                ]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_zero_price_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Free", "price": 0 }))
            .send(&products_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            json!({
                "errors": [{ "field": "price", "message": "price must be greater than zero" }]
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_store_rejection_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Monitor", "price": 300 }))
            .send(&products_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_store_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Monitor", "price": 300 }))
            .send(&products_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body, json!({ "error": "Internal Server Error" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_name_with_nul_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_toggle_availability().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/api/products")
            .json(&json!({ "name": "Moni\u{0}tor", "price": 300 }))
            .send(&products_service(repo))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            body,
            json!({
                "errors": [{ "field": "name", "message": "name must not contain NUL characters" }]
            })
        );

        Ok(())
    }
}
