use actix_web::{web, HttpResponse, Responder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::viewer::state::{page_width, PageButton, ViewerAction, ViewerState};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ViewerRequest {
    /// Omitted for a document that has not been opened yet.
    pub state: Option<ViewerState>,
    pub action: ViewerAction,
    #[schema(example = 1024)]
    pub container_width: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ViewerResponse {
    pub state: ViewerState,
    #[schema(example = 100)]
    pub zoom_percent: u32,
    pub page_buttons: Vec<PageButton>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub page_width: Option<u32>,
}

impl From<(ViewerState, Option<u32>)> for ViewerResponse {
    fn from((state, container_width): (ViewerState, Option<u32>)) -> Self {
        Self {
            zoom_percent: state.zoom_percent(),
            page_buttons: state.page_buttons(),
            can_go_previous: state.can_go_previous(),
            can_go_next: state.can_go_next(),
            page_width: container_width.map(page_width),
            state,
        }
    }
}

#[utoipa::path(
    context_path = "/api",
    tag = "Viewer Service",
    post,
    path = "/viewer",
    request_body = ViewerRequest,
    responses(
        (status = 200, description = "Next viewer state with derived pagination data", body = ViewerResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn apply_viewer_action(req: web::Json<ViewerRequest>) -> impl Responder {
    let ViewerRequest {
        state,
        action,
        container_width,
    } = req.into_inner();
    info!("Executing apply_viewer_action handler");
    debug!("Applying {:?} to {:?}", action, state);

    let next = state.unwrap_or_default().sanitized().apply(action);
    if let Some(message) = &next.error {
        warn!("Viewer reported render failure: {}", message);
    }

    HttpResponse::Ok().json(ViewerResponse::from((next, container_width)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/viewer").route(web::post().to(apply_viewer_action)));
}
