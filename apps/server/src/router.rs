use axum::Router;
use ipnt::domain::constants::{DIRECTORY_TAG, SYSTEM_TAG};
use ipnt::kernel::prelude::ApiState;
use ipnt::server::router::{directory_router, pages_router, system_router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "IPNT mesh site", description = "Read-only view of the mesh network directory"),
    tags(
        (name = SYSTEM_TAG, description = "Liveness"),
        (name = DIRECTORY_TAG, description = "Public nodes, members and site configuration"),
    )
)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: ApiState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    // JSON endpoints are documented; the HTML pages are not.
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(directory_router())
        .split_for_parts();

    Router::new()
        .merge(api_routes)
        .merge(pages_router())
        .merge(Scalar::with_url("/api", api_doc))
        .nest_service("/assets", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
