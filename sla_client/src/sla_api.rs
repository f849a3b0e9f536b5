use async_trait::async_trait;
use helper::reqwest_helper::deserialize_response;
use model::domain::sla::{ActionOption, MetricOption, ServiceLevelAgreement};
use model::{FeedId, SlaId};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

use super::configuration::{Configuration, SlaUrls};
use super::Error;

const JSON_UTF8: &str = "application/json; charset=UTF-8";

#[async_trait]
pub trait SlaApi: Debug + Sync + Send {
    async fn get_possible_sla_metric_options(
        &self,
    ) -> Result<Vec<MetricOption>, Error>;
    async fn get_possible_sla_action_options(
        &self,
    ) -> Result<Vec<ActionOption>, Error>;
    /// Save several SLAs of the same feed in one request.
    ///
    /// Superseded by [SlaApi::save_feed_sla]. The feed is taken from the
    /// `feedId` of the agreements, which must all name the same one.
    async fn save_feed_slas(
        &self,
        slas: &[ServiceLevelAgreement],
    ) -> Result<Value, Error>;
    async fn save_feed_sla(
        &self,
        feed_id: &FeedId,
        sla: &ServiceLevelAgreement,
    ) -> Result<Value, Error>;
    async fn delete_sla(&self, sla_id: &SlaId) -> Result<Value, Error>;
    async fn get_feed_slas(
        &self,
        feed_id: &FeedId,
    ) -> Result<Vec<ServiceLevelAgreement>, Error>;
}

/// Feed owning a batch of agreements.
pub(crate) fn feed_of(slas: &[ServiceLevelAgreement]) -> Result<FeedId, Error> {
    let (first, rest) = slas.split_first().ok_or_else(|| {
        Error::InvalidInput("no service level agreement to save".to_string())
    })?;

    let feed_id = parse_feed_id(first)?;
    for sla in rest {
        let other = parse_feed_id(sla)?;
        if other != feed_id {
            return Err(Error::InvalidInput(format!(
                "service level agreements belong to different feeds: {} and \
                 {}",
                feed_id, other
            )));
        }
    }

    Ok(feed_id)
}

fn parse_feed_id(sla: &ServiceLevelAgreement) -> Result<FeedId, Error> {
    let raw = sla.raw_feed_id().ok_or_else(|| {
        Error::InvalidInput(
            "the service level agreement has no feedId".to_string(),
        )
    })?;
    raw.parse()
        .map_err(|err: model::IdError| Error::InvalidInput(err.to_string()))
}

#[derive(Clone, Debug)]
pub struct SlaApiClient {
    configuration: Configuration,
    urls:          Arc<dyn SlaUrls>,
    client:        Arc<ClientWithMiddleware>,
}

impl SlaApiClient {
    /// Client of the resources laid out under the configured base path.
    pub fn new(
        configuration: Configuration,
        client: Arc<ClientWithMiddleware>,
    ) -> SlaApiClient {
        let urls = Arc::new(configuration.urls());
        SlaApiClient::with_urls(configuration, urls, client)
    }

    /// Client of resources whose URLs are resolved by `urls`.
    pub fn with_urls(
        configuration: Configuration,
        urls: Arc<dyn SlaUrls>,
        client: Arc<ClientWithMiddleware>,
    ) -> SlaApiClient {
        SlaApiClient { configuration, urls, client }
    }

    fn authenticate(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some((username, password)) = &self.configuration.basic_auth {
            builder = builder.basic_auth(username, password.as_ref());
        }
        builder
    }

    async fn get<T: DeserializeOwned>(
        &self,
        uri_str: &str,
    ) -> Result<T, Error> {
        trace!("Requesting {}", uri_str);
        let builder = self.authenticate(self.client.get(uri_str));
        Self::decode(builder.send().await?).await
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        uri_str: &str,
        body: &B,
    ) -> Result<Value, Error> {
        trace!("Requesting {}", uri_str);
        let builder = self.authenticate(
            self.client
                .post(uri_str)
                .header(CONTENT_TYPE, JSON_UTF8)
                .body(serde_json::to_string(body)?),
        );
        Self::decode(builder.send().await?).await
    }

    async fn delete(&self, uri_str: &str) -> Result<Value, Error> {
        trace!("Requesting {}", uri_str);
        let builder = self.authenticate(
            self.client.delete(uri_str).header(CONTENT_TYPE, JSON_UTF8),
        );
        Self::decode(builder.send().await?).await
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, Error> {
        debug!("response status: {}", response.status());

        if response.status().is_success() {
            deserialize_response(response).await.map_err(Error::Decode)
        } else {
            let status = response.status();
            let text = response.text().await?;
            Err(Error::RequestStatus(status, text))
        }
    }
}

#[async_trait]
impl SlaApi for SlaApiClient {
    #[instrument(level = "trace", skip(self))]
    async fn get_possible_sla_metric_options(
        &self,
    ) -> Result<Vec<MetricOption>, Error> {
        self.get(&self.urls.possible_sla_metric_options()).await
    }

    #[instrument(level = "trace", skip(self))]
    async fn get_possible_sla_action_options(
        &self,
    ) -> Result<Vec<ActionOption>, Error> {
        self.get(&self.urls.possible_sla_action_options()).await
    }

    #[instrument(
        level = "trace",
        skip(self, slas),
        fields(count = slas.len())
    )]
    async fn save_feed_slas(
        &self,
        slas: &[ServiceLevelAgreement],
    ) -> Result<Value, Error> {
        let feed_id = feed_of(slas)?;
        self.post(&self.urls.save_feed_sla(&feed_id), slas).await
    }

    #[instrument(level = "trace", skip(self, sla))]
    async fn save_feed_sla(
        &self,
        feed_id: &FeedId,
        sla: &ServiceLevelAgreement,
    ) -> Result<Value, Error> {
        self.post(&self.urls.save_feed_sla(feed_id), sla).await
    }

    #[instrument(level = "trace", skip(self))]
    async fn delete_sla(&self, sla_id: &SlaId) -> Result<Value, Error> {
        self.delete(&self.urls.delete_sla(sla_id)).await
    }

    #[instrument(level = "trace", skip(self))]
    async fn get_feed_slas(
        &self,
        feed_id: &FeedId,
    ) -> Result<Vec<ServiceLevelAgreement>, Error> {
        self.get(&self.urls.feed_slas(feed_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sla(payload: Value) -> ServiceLevelAgreement {
        ServiceLevelAgreement::new(payload)
    }

    #[test]
    fn test_feed_of_batch() {
        let slas = [
            sla(json!({"feedId": "f1", "name": "a"})),
            sla(json!({"feedId": "f1", "name": "b"})),
        ];
        assert_eq!(feed_of(&slas).unwrap().as_str(), "f1");
    }

    #[test]
    fn test_feed_of_empty_batch() {
        assert!(matches!(feed_of(&[]), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_feed_of_missing_feed() {
        let slas = [sla(json!({"name": "a"}))];
        assert!(matches!(feed_of(&slas), Err(Error::InvalidInput(_))));

        let slas = [sla(json!({"feedId": "f1"})), sla(json!({"name": "b"}))];
        assert!(matches!(feed_of(&slas), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_feed_of_padded_feed_ids() {
        let slas =
            [sla(json!({"feedId": "f1"})), sla(json!({"feedId": " f1"}))];
        assert_eq!(feed_of(&slas).unwrap().as_str(), "f1");
    }

    #[test]
    fn test_feed_of_mixed_feeds() {
        let slas = [sla(json!({"feedId": "f1"})), sla(json!({"feedId": "f2"}))];
        let Err(Error::InvalidInput(msg)) = feed_of(&slas) else {
            panic!("mixed feeds must be refused");
        };
        assert!(msg.contains("f2"));
    }

    #[test]
    fn test_feed_of_unusable_feed_id() {
        let slas = [sla(json!({"feedId": "a/b"}))];
        assert!(matches!(feed_of(&slas), Err(Error::InvalidInput(_))));
    }
}
