use utoipa::OpenApi;

use crate::application::http::{
    allergy::router::AllergyApiDoc, authentication::router::AuthenticationApiDoc,
    dashboard::router::DashboardApiDoc, health::HealthApiDoc,
    recommendation::router::RecommendationApiDoc, scan::router::ScanApiDoc,
    scan_history::router::ScanHistoryApiDoc,
    server::api_entities::api_error::ApiErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AllergyScan API"
    ),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/allergies", api = AllergyApiDoc),
        (path = "/history", api = ScanHistoryApiDoc),
    ),
    components(schemas(ApiErrorResponse))
)]
pub struct ApiDoc;

/// Full document, including the routes that live at the top level.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ScanApiDoc::openapi());
    openapi.merge(RecommendationApiDoc::openapi());
    openapi.merge(DashboardApiDoc::openapi());
    openapi.merge(HealthApiDoc::openapi());
    openapi
}
