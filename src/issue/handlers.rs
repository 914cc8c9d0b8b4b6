use actix_files::NamedFile;
use actix_web::{
    web::{self, Path},
    HttpRequest, HttpResponse, Responder,
};
use log::{error, info, warn};
use std::path::Path as StdPath;

use crate::edition::CanonicalId;
use crate::issue::models::IssueResolution;
use crate::{AppState, ErrorResponse};

#[utoipa::path(
    context_path = "/api",
    tag = "Issue Service",
    get,
    path = "/issues/today",
    responses(
        (status = 200, description = "Today's issue, or the placeholder with a warning when it is not yet published", body = IssueResolution)
    )
)]
pub async fn get_today_issue(data: web::Data<AppState>) -> impl Responder {
    let today = data.today();
    info!("Executing get_today_issue handler for {}", today);
    let resolution = data.resolver.resolve_today(today).await;
    HttpResponse::Ok().json(resolution)
}

#[utoipa::path(
    context_path = "/api",
    tag = "Issue Service",
    get,
    path = "/issues/{canonical_id}",
    responses(
        (status = 200, description = "Issue selected from the archive", body = IssueResolution),
        (status = 400, description = "Malformed canonical id", body = ErrorResponse)
    ),
    params(
        ("canonical_id" = String, Path, description = "Issue id in DD-MM-YY form, optionally with .pdf")
    )
)]
pub async fn get_issue_by_id(path: Path<String>, data: web::Data<AppState>) -> impl Responder {
    let raw = path.into_inner();
    info!("Executing get_issue_by_id handler for {}", raw);

    let resolved = CanonicalId::parse(&raw).and_then(|id| data.resolver.resolve_selected(&id));
    match resolved {
        Ok(resolution) => HttpResponse::Ok().json(resolution),
        Err(e) => {
            error!("Rejected issue id '{}': {}", raw, e);
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string()))
        }
    }
}

/// Serves the placeholder issue from the public directory. Mounted at the
/// configured fallback URL.
pub async fn serve_fallback(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let fallback_url = data.resolver.fallback_url();
    info!("Executing serve_fallback handler for {}", fallback_url);

    let Some(name) = StdPath::new(fallback_url).file_name() else {
        error!("Fallback URL '{}' does not name a file", fallback_url);
        return HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
            "Placeholder {} not found",
            fallback_url
        )));
    };

    let file_path = data.config.public_dir.join(name);
    match NamedFile::open_async(&file_path).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            warn!(
                "Placeholder {} missing at {}: {}",
                fallback_url,
                file_path.display(),
                e
            );
            HttpResponse::NotFound().json(ErrorResponse::not_found(&format!(
                "Placeholder {} not found",
                fallback_url
            )))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/issues/today").route(web::get().to(get_today_issue)))
        .service(web::resource("/issues/{canonical_id}").route(web::get().to(get_issue_by_id)));
}
