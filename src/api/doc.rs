use utoipa::OpenApi;

pub const CONFIGURATION_TAG: &str = "Configuration";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Confview",
        description = "Read-only configuration snapshot service",
    ),
    paths(crate::api::handlers::configuration::get_configuration),
    components(
        schemas(
            crate::api::dto::ConfigurationResponse,
            crate::api::dto::CredentialsDto,
            crate::api::dto::StorageDto,
        )
    ),
    tags(
        (name = CONFIGURATION_TAG, description = "Configuration snapshot endpoints"),
    )
)]
pub struct ApiDoc;
