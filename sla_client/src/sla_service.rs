use model::domain::sla::{ActionOption, MetricOption, ServiceLevelAgreement};
use model::{FeedId, SlaId};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use super::sla_api::SlaApi;
use super::Error;

/// Service used by the feed views to manage the SLAs of a feed.
///
/// Every failure is logged once. The reads hand the error back to the
/// caller, the mutations swallow it and return `None`; existing callers
/// rely on that split. New code should use [SlaApi] directly.
#[derive(Debug, Clone)]
pub struct SlaService {
    api: Arc<dyn SlaApi>,
}

impl SlaService {
    pub fn new(api: Arc<dyn SlaApi>) -> Self { Self { api } }

    pub async fn get_possible_sla_metric_options(
        &self,
    ) -> Result<Vec<MetricOption>, Error> {
        self.api.get_possible_sla_metric_options().await.map_err(|err| {
            error!("Failed to get the possible SLA metrics: {}", err);
            err
        })
    }

    pub async fn get_possible_sla_action_options(
        &self,
    ) -> Result<Vec<ActionOption>, Error> {
        self.api.get_possible_sla_action_options().await.map_err(|err| {
            error!("Failed to get the possible SLA actions: {}", err);
            err
        })
    }

    #[deprecated(note = "save the agreements one by one with `save_feed_sla`")]
    pub async fn save_feed_slas(
        &self,
        slas: &[ServiceLevelAgreement],
    ) -> Option<Value> {
        self.api
            .save_feed_slas(slas)
            .await
            .map_err(|err| error!("Failed to save the feed SLAs: {}", err))
            .ok()
    }

    pub async fn save_feed_sla(
        &self,
        feed_id: &FeedId,
        sla: &ServiceLevelAgreement,
    ) -> Option<Value> {
        self.api
            .save_feed_sla(feed_id, sla)
            .await
            .map_err(|err| {
                error!("Failed to save an SLA of feed {}: {}", feed_id, err)
            })
            .ok()
    }

    pub async fn delete_sla(&self, sla_id: &SlaId) -> Option<Value> {
        self.api
            .delete_sla(sla_id)
            .await
            .map_err(|err| error!("Failed to delete SLA {}: {}", sla_id, err))
            .ok()
    }

    pub async fn get_feed_slas(
        &self,
        feed_id: &FeedId,
    ) -> Result<Vec<ServiceLevelAgreement>, Error> {
        self.api.get_feed_slas(feed_id).await.map_err(|err| {
            error!("Failed to get the SLAs of feed {}: {}", feed_id, err);
            err
        })
    }
}
