//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    products::{
        MockProductsService,
        records::{ProductId, ProductRecord},
    },
};

use crate::{router, state::State};

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        name: "Monitor".to_string(),
        price: 300.0,
        availability: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products)))
}

/// The full product routing tree, validators included, over a mocked service.
pub(crate) fn products_service(products: MockProductsService) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(router::app_router()),
    )
}
