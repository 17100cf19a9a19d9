/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use itemvault_api::{app::{build_router, AppState}, config::Config};
/// use itemvault_shared::db::{pool::create_pool, PgStore};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.database.clone()).await?;
/// let state = AppState::new(Arc::new(PgStore::new(pool)), config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError};
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::{from_fn_with_state, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use itemvault_shared::{
    auth::{middleware::authenticate, service::AuthService},
    models::{ItemStore, UserStore},
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor; every
/// field is an `Arc` or wraps one. User lookups go through `auth`.
#[derive(Clone)]
pub struct AppState {
    /// Item store
    pub items: Arc<dyn ItemStore>,

    /// Registration, login, and token verification
    pub auth: AuthService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state backed by a single store implementing both traits
    pub fn new<S>(store: Arc<S>, config: Config) -> Self
    where
        S: UserStore + ItemStore + 'static,
    {
        let users: Arc<dyn UserStore> = store.clone();
        let auth = AuthService::new(users, config.jwt.secret.clone());
        Self {
            items: store,
            auth,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET    /health        # Health check (public)
/// ├── POST   /register      # Create account, returns token (public)
/// ├── POST   /login         # Exchange credentials for token (public)
/// └── /items                # Bearer token required
///     ├── GET    /items
///     ├── POST   /items
///     ├── GET    /items/:id
///     ├── PUT    /items/:id
///     └── DELETE /items/:id
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
/// 3. Authentication (item routes only)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    let item_routes = Router::new()
        .route(
            "/items",
            get(routes::items::list_items).post(routes::items::create_item),
        )
        .route(
            "/items/:id",
            get(routes::items::get_item)
                .put(routes::items::update_item)
                .delete(routes::items::delete_item),
        )
        .route_layer(from_fn_with_state(state.clone(), jwt_auth_layer));

    let cors = if state.config.cors_allows_any() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(public_routes)
        .merge(item_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Bearer token authentication layer
///
/// Validates the token and attaches the caller's `AuthContext` to the
/// request; the handler never runs for a rejected request.
async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = authenticate(&state.auth, req.headers())?;
    req.extensions_mut().insert(context);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemvault_shared::models::{memory::MemoryStore, ItemInput};

    fn test_config() -> Config {
        Config::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://unused/itemvault".to_string()),
            "JWT_SECRET" => Some("app-state-test-secret-at-least-32-bytes".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_state_shares_one_store() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store.clone(), test_config());

        let (user, token) = state
            .auth
            .register("alice", "alice@example.com", "hunter2")
            .await
            .unwrap();
        assert_eq!(store.find_by_username("alice").await.unwrap().unwrap().id, user.id);
        assert_eq!(state.auth.verify_token(&token).unwrap().username, "alice");

        state
            .items
            .create_item(ItemInput::new("Cable".to_string(), 10, None))
            .await
            .unwrap();
        assert_eq!(store.count_items().await.unwrap(), 1);
    }
}
