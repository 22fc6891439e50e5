//! Products

pub(crate) mod errors;
mod handlers;
pub(crate) mod validation;

pub(crate) use handlers::*;
