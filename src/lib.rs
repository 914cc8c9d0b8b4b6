use actix_cors::Cors;
use actix_files::Files;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod archive;
pub mod config;
pub mod edition;
pub mod issue;
pub mod state;
pub mod viewer;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::issue::handlers::get_today_issue,
        crate::issue::handlers::get_issue_by_id,
        crate::archive::handlers::get_archive,
        crate::archive::handlers::get_filter_options,
        crate::viewer::handlers::apply_viewer_action
    ),
    components(
        schemas(
            edition::CanonicalId,
            issue::models::IssueResolution,
            archive::models::ArchiveEntry,
            archive::models::ArchiveResponse,
            archive::models::FilterOption,
            archive::models::FilterOptionsResponse,
            viewer::state::ViewerState,
            viewer::state::ViewerAction,
            viewer::state::PageButton,
            viewer::handlers::ViewerRequest,
            viewer::handlers::ViewerResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Issue Service", description = "Today's issue and archive selection."),
        (name = "Archive Service", description = "Rolling archive listing and filters."),
        (name = "Viewer Service", description = "Page navigation and zoom state.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Localhost server")
    )
)]
pub struct ApiDoc;

/// Registers every JSON endpoint under `/api`.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(issue::handlers::config)
            .configure(archive::handlers::config)
            .configure(viewer::handlers::config),
    );
}

/// Static issue serving: the `/public` directory plus the placeholder issue
/// at its configured origin-relative URL.
pub fn public_config(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    if config.fallback_url.starts_with('/') {
        cfg.service(
            web::resource(config.fallback_url.as_str())
                .route(web::get().to(issue::handlers::serve_fallback))
                .route(web::head().to(issue::handlers::serve_fallback)),
        );
    }
    cfg.service(Files::new("/public", config.public_dir.clone()));
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = match AppState::new(config.clone()) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("Failed to build HTTP client for issue probing: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("flash_epaper_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!(
        "Starting server at http://{}:{} (issues from {}, probing {})",
        config.host,
        config.port,
        config.public_dir.display(),
        config.content_origin
    );

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .configure(api_config)
            .configure(|cfg| public_config(cfg, &config))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_addr)?
    .run()
    .await
}
