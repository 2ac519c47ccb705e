use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    middleware,
    routing::{get, patch, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, load_shed::LoadShedLayer, ServiceBuilder};
use tower_http::cors::{Any, CorsLayer};

use crate::{app, auth, panes, AppState};

use super::{env::Envy, errors::DefaultApiError, models::api_error::ApiError};

/// The routes wrapped in CORS, the body limit and the rate limit.
pub fn build_app(state: AppState, envy: &Envy) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET, Method::PATCH]);

    build_router(state)
        .layer(cors)
        .layer(DefaultBodyLimit::max(envy.max_body_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(LoadShedLayer::new())
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(
                    envy.rate_limit_per_sec,
                    Duration::from_secs(1),
                )),
        )
}

async fn handle_layer_error(err: BoxError) -> ApiError {
    tracing::warn!("handle_layer_error (1): {:?}", err);

    match err.is::<tower::load_shed::error::Overloaded>() {
        true => DefaultApiError::Overloaded.value(),
        false => DefaultApiError::InternalServerError.value(),
    }
}

pub fn build_router(state: AppState) -> Router {
    let panes = Router::new()
        .route(
            "/panes",
            get(panes::controller::get_panes).post(panes::controller::add_pane),
        )
        .route("/panes/generate", post(panes::controller::generate_all))
        .route("/panes/paste", post(panes::controller::paste_into_focused))
        .route("/panes/:id", get(panes::controller::get_pane_by_id))
        .route(
            "/panes/:id/params",
            patch(panes::controller::edit_params_by_id),
        )
        .route(
            "/panes/:id/strokes/begin",
            post(panes::controller::begin_stroke),
        )
        .route(
            "/panes/:id/strokes/extend",
            post(panes::controller::extend_stroke),
        )
        .route("/panes/:id/strokes/end", post(panes::controller::end_stroke))
        .route("/panes/:id/clear", post(panes::controller::clear))
        .route("/panes/:id/sketch", get(panes::controller::get_sketch))
        .route("/panes/:id/generate", post(panes::controller::generate))
        .route("/panes/:id/copy", post(panes::controller::copy))
        .route("/panes/:id/paste", post(panes::controller::paste))
        .route("/panes/:id/focus", post(panes::controller::focus))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::guard::require_access,
        ));

    Router::new()
        .route("/", get(app::controller::get_root))
        .route("/auth/login", post(auth::controller::login))
        .merge(panes)
        .with_state(state)
}
