//! CORS Config

use clap::Args;
use salvo::{
    cors::{Cors, CorsHandler},
    http::Method,
};

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// The only browser origin allowed to call the API; CORS is disabled when unset
    #[arg(long, env = "FRONTEND_URL")]
    pub frontend_url: Option<String>,
}

impl CorsConfig {
    /// Builds the CORS middleware, if an origin is configured.
    #[must_use]
    pub fn handler(&self) -> Option<CorsHandler> {
        self.frontend_url.as_deref().map(|origin| {
            Cors::new()
                .allow_origin(origin)
                .allow_methods(vec![
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers("content-type")
                .into_handler()
        })
    }
}
