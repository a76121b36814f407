use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "CRUD over an in-memory list of users.\n\n**Notes:**\n- Ids are generated by the server on creation\n- Data is kept in memory only and lost on restart\n- No authentication, no field validation",
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserPayload,
            crate::models::MessageResponse,
            crate::models::ErrorResponse,

            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "List, create, update and delete users."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;
