//! OpenAPI configuration.

use crate::feature::hello::hello_api;
use utoipa::OpenApi;

/// OpenApi configuration.
#[derive(OpenApi)]
#[openapi(
    paths(hello_api::hello),
    components(schemas(crate::infra::error::ErrorBody))
)]
#[derive(Clone, Copy, Debug)]
pub struct ApiDoc;
