pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod todos;
pub mod validation;

use axum::{
    extract::FromRef,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, LoginRequest, SignupRequest};
use error::ErrorResponse;
use todos::{
    Color, CreateTodoListRequest, CreateTodoRequest, Todo, TodoListResponse, TodoService,
    UpdateTodoRequest,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::signup_handler,
        auth::handlers::login_handler,
        auth::handlers::logout_handler,
        todos::handlers::create_todo_list_handler,
        todos::handlers::list_todo_lists_handler,
        todos::handlers::get_todo_list_handler,
        todos::handlers::delete_todo_list_handler,
        todos::handlers::create_todo_handler,
        todos::handlers::update_todo_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            SignupRequest,
            LoginRequest,
            Color,
            CreateTodoListRequest,
            CreateTodoRequest,
            UpdateTodoRequest,
            TodoListResponse,
            Todo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Signup, login and logout"),
        (name = "todo lists", description = "Color-tagged todo lists owned by the caller"),
        (name = "todos", description = "Todos inside the caller's lists")
    ),
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "Multi-user todo list service with bearer token authentication"
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub todo_service: TodoService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            auth_service: AuthService::new(pool.clone()),
            todo_service: TodoService::new(pool),
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth_service.clone()
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds tracing and CORS middleware
pub fn create_router(state: AppState) -> Router {
    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Authentication
        .route("/signup", post(auth::signup_handler))
        .route("/login", post(auth::login_handler))
        .route("/logout", post(auth::logout_handler))
        // Todo lists
        .route(
            "/todolists",
            post(todos::create_todo_list_handler).get(todos::list_todo_lists_handler),
        )
        .route(
            "/todolists/:id",
            get(todos::get_todo_list_handler).delete(todos::delete_todo_list_handler),
        )
        .route("/todolists/:id/todos", post(todos::create_todo_handler))
        // Todos
        .route("/todos/:id", put(todos::update_todo_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
