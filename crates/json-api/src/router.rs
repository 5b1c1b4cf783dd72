//! App Router

use salvo::Router;

use crate::campaigns;

/// Versioned API routes, mounted under `api/v1`.
pub fn app_router() -> Router {
    Router::with_path("campaigns")
        .push(Router::with_path("eligible").get(campaigns::eligible::handler))
}
