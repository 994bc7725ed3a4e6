use utoipa::OpenApi;
use crate::{handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::set_color,
    ),
    components(
        schemas(models::ColorRequest, models::ColorResponse)
    )
)]
pub struct ApiDoc;
