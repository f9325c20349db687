//! Configuration snapshot DTOs for API responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::AppConfig;

/// Configuration snapshot response.
///
/// The JSON body served by `GET /configuration`: exactly the four top-level
/// keys `port`, `credentials`, `services` and `storage`, with field names
/// matching the snapshot's attribute names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "port": 8080,
    "credentials": {
        "username": "svc",
        "secret": "abc"
    },
    "services": {
        "billing": "http://billing.internal:9000"
    },
    "storage": {
        "url": "s3://storage.internal:9000",
        "bucket": "confview"
    }
}))]
pub struct ConfigurationResponse {
    /// Network port number advertised to consumers
    #[schema(example = 8080)]
    pub port: u16,
    /// Downstream credentials
    pub credentials: CredentialsDto,
    /// Named downstream service endpoints (name -> base URL)
    pub services: BTreeMap<String, String>,
    /// Storage connection and location settings
    pub storage: StorageDto,
}

/// Credentials section of the snapshot response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CredentialsDto {
    /// Identity used against downstream services
    #[schema(example = "svc")]
    pub username: String,
    /// Secret paired with the identity
    #[schema(example = "abc")]
    pub secret: String,
}

/// Storage section of the snapshot response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StorageDto {
    /// Storage connection URL
    #[schema(example = "s3://storage.internal:9000")]
    pub url: String,
    /// Storage location (bucket or root path)
    #[schema(example = "confview")]
    pub bucket: String,
}

impl From<&AppConfig> for ConfigurationResponse {
    fn from(snapshot: &AppConfig) -> Self {
        Self {
            port: snapshot.port,
            credentials: CredentialsDto {
                username: snapshot.credentials.username.clone(),
                secret: snapshot.credentials.secret.clone(),
            },
            services: snapshot.services.clone(),
            storage: StorageDto {
                url: snapshot.storage.url.clone(),
                bucket: snapshot.storage.bucket.clone(),
            },
        }
    }
}
