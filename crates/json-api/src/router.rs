//! App Router

use salvo::Router;

use crate::products::{
    self,
    validation::{validate_id, validate_new_product, validate_product_update},
};

pub(crate) fn app_router() -> Router {
    Router::with_path("api/products")
        .get(products::index::handler)
        .push(
            Router::new()
                .hoop(validate_new_product)
                .post(products::create::handler),
        )
        .push(
            Router::with_path("{id}")
                .hoop(validate_id)
                .get(products::get::handler)
                .patch(products::availability::handler)
                .delete(products::delete::handler)
                .push(
                    Router::new()
                        .hoop(validate_product_update)
                        .put(products::update::handler),
                ),
        )
}
