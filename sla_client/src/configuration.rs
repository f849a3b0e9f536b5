use model::{FeedId, SlaId};
use nutype::nutype;
use std::fmt::Debug;

/// Prefix under which the feed manager REST resources are exposed.
pub const FEED_MGR_PREFIX: &str = "/proxy/v1/feedmgr";

fn strip_trailing_slash(path: String) -> String {
    path.trim_end_matches('/').to_string()
}

fn is_http_url(path: &str) -> bool {
    reqwest::Url::parse(path)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

/// Scheme, host and port of the feed manager, e.g. `http://localhost:8400`.
#[nutype(
    derive(Clone, Debug, PartialEq, AsRef, Display),
    sanitize(trim, with = strip_trailing_slash),
    validate(predicate = is_http_url)
)]
pub struct BasePath(String);

pub type BasicAuth = (String, Option<String>);

#[derive(Clone, Debug)]
pub struct Configuration {
    pub base_path:  BasePath,
    pub basic_auth: Option<BasicAuth>,
}

impl Configuration {
    pub fn new(base_path: BasePath) -> Self {
        Configuration { base_path, basic_auth: None }
    }

    pub fn with_basic_auth(
        mut self,
        username: String,
        password: Option<String>,
    ) -> Self {
        self.basic_auth = Some((username, password));
        self
    }

    pub fn urls(&self) -> RestUrls { RestUrls::new(&self.base_path) }
}

/// Resolves the URL of every SLA resource of the feed manager.
pub trait SlaUrls: Debug + Sync + Send {
    fn possible_sla_metric_options(&self) -> String;
    fn possible_sla_action_options(&self) -> String;
    fn save_feed_sla(&self, feed_id: &FeedId) -> String;
    fn delete_sla(&self, sla_id: &SlaId) -> String;
    fn feed_slas(&self, feed_id: &FeedId) -> String;
}

/// Default layout, every resource under `{base_path}/proxy/v1/feedmgr/sla`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestUrls {
    root: String,
}

impl RestUrls {
    pub fn new(base_path: &BasePath) -> Self {
        RestUrls { root: format!("{}{}", base_path, FEED_MGR_PREFIX) }
    }
}

impl SlaUrls for RestUrls {
    fn possible_sla_metric_options(&self) -> String {
        format!("{}/sla/available-metrics", self.root)
    }

    fn possible_sla_action_options(&self) -> String {
        format!("{}/sla/available-responders", self.root)
    }

    fn save_feed_sla(&self, feed_id: &FeedId) -> String {
        format!("{}/sla/feed/{}", self.root, feed_id)
    }

    fn delete_sla(&self, sla_id: &SlaId) -> String {
        format!("{}/sla/{}", self.root, sla_id)
    }

    fn feed_slas(&self, feed_id: &FeedId) -> String {
        format!("{}/sla/feed/{}", self.root, feed_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    fn urls() -> RestUrls {
        let base_path = BasePath::try_new("http://kylo:8400/".to_string());
        RestUrls::new(&base_path.unwrap())
    }

    #[parameterized(
        plain = {"http://localhost:8400", "http://localhost:8400"},
        trailing_slash = {"https://kylo.example.com/", "https://kylo.example.com"},
        padded = {"  http://10.0.0.3:8400//  ", "http://10.0.0.3:8400"},
    )]
    fn test_base_path(raw: &str, expected: &str) {
        let base_path = BasePath::try_new(raw.to_string()).unwrap();
        assert_eq!(base_path.into_inner(), expected);
    }

    #[parameterized(
        empty = {""},
        no_scheme = {"localhost:8400"},
        ftp = {"ftp://kylo"},
        relative = {"/proxy"},
    )]
    fn test_base_path_rejected(raw: &str) {
        assert!(BasePath::try_new(raw.to_string()).is_err());
    }

    #[test]
    fn test_static_urls() {
        let urls = urls();
        assert_eq!(
            urls.possible_sla_metric_options(),
            "http://kylo:8400/proxy/v1/feedmgr/sla/available-metrics"
        );
        assert_eq!(
            urls.possible_sla_action_options(),
            "http://kylo:8400/proxy/v1/feedmgr/sla/available-responders"
        );
    }

    #[test]
    fn test_parameterized_urls() {
        let urls = urls();
        let feed: FeedId = "f1".parse().unwrap();
        let sla: SlaId = "sla-42".parse().unwrap();
        assert_eq!(
            urls.save_feed_sla(&feed),
            "http://kylo:8400/proxy/v1/feedmgr/sla/feed/f1"
        );
        assert_eq!(
            urls.feed_slas(&feed),
            "http://kylo:8400/proxy/v1/feedmgr/sla/feed/f1"
        );
        assert_eq!(
            urls.delete_sla(&sla),
            "http://kylo:8400/proxy/v1/feedmgr/sla/sla-42"
        );
    }
}
