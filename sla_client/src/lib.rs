//! Client of the feed manager SLA REST resources.
//!
//! [SlaApi] is the typed client: every operation returns a `Result` and
//! leaves the failure to the caller. [SlaService] sits on top of it for the
//! callers written against the historical service, which logged every
//! failure and then either handed it back (reads) or swallowed it
//! (mutations).

pub mod configuration;
pub mod sla_api;
pub mod sla_service;

pub use configuration::{BasePath, Configuration, RestUrls, SlaUrls};
pub use sla_api::{SlaApi, SlaApiClient};
pub use sla_service::SlaService;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error("The request failed with error code {0}: {1}")]
    RequestStatus(reqwest::StatusCode, String),
    #[error("Failed to decode the response: {0:#}")]
    Decode(anyhow::Error),
    #[error("Failed to serialize the request body: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
