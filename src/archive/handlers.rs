use actix_web::{web, HttpResponse, Responder};
use log::{debug, info};

use crate::archive::filter::{ArchiveFilter, EMPTY_RESULT_MESSAGE};
use crate::archive::generator::{
    generate_with_page_count, month_options, year_options, YEAR_OPTION_COUNT,
};
use crate::archive::models::{ArchiveQuery, ArchiveResponse, FilterOptionsResponse};
use crate::AppState;

#[utoipa::path(
    context_path = "/api",
    tag = "Archive Service",
    get,
    path = "/archive",
    params(ArchiveQuery),
    responses(
        (status = 200, description = "Archive entries for the rolling window, most recent first, narrowed by the given filters", body = ArchiveResponse)
    )
)]
pub async fn get_archive(
    query: web::Query<ArchiveQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Executing get_archive handler");
    let reference_date = data.today();
    let entries = generate_with_page_count(
        reference_date,
        data.config.archive_days,
        data.config.page_count,
    );
    let total = entries.len();

    let filter = ArchiveFilter::from(query.into_inner());
    debug!("Applying archive filter {:?} to {} entries", filter, total);
    let entries = if filter.is_unconstrained() {
        entries
    } else {
        filter.apply(&entries)
    };
    info!("Archive request matched {} of {} entries", entries.len(), total);

    let empty_message = entries
        .is_empty()
        .then(|| EMPTY_RESULT_MESSAGE.to_string());

    HttpResponse::Ok().json(ArchiveResponse {
        reference_date,
        total,
        entries,
        empty_message,
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Archive Service",
    get,
    path = "/archive/filters",
    responses(
        (status = 200, description = "Month and year selector options", body = FilterOptionsResponse)
    )
)]
pub async fn get_filter_options(data: web::Data<AppState>) -> impl Responder {
    info!("Executing get_filter_options handler");
    HttpResponse::Ok().json(FilterOptionsResponse {
        months: month_options(),
        years: year_options(data.today(), YEAR_OPTION_COUNT),
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/archive").route(web::get().to(get_archive)))
        .service(web::resource("/archive/filters").route(web::get().to(get_filter_options)));
}
