use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::CityReport;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::weather,
    ),
    components(schemas(CityReport)),
    tags(
        (name = "weather", description = "Batch weather lookups"),
    ),
)]
struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
