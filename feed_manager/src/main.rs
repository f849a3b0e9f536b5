#[macro_use]
extern crate tracing;

use anyhow::Context;
use helper::{env_load, env_load_opt, env_var};
#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
use model::FeedId;
use nutype::nutype;
use reqwest_middleware::ClientBuilder;
use serde_json::Value;
use sla_client::{BasePath, Configuration, SlaApi, SlaApiClient, SlaService};
use std::collections::BTreeMap;
use std::sync::Arc;
use ui_router::asset::FsAssetLoader;
use ui_router::loader::CatalogLoader;
use ui_router::{feed_mgr, feeds, Application};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

env_var!(SLA_API_BASE_PATH);
env_var!(SLA_API_USERNAME);
env_var!(SLA_API_PASSWORD);
env_var!(STATIC_ROOT);
env_var!(FEEDS_TAB);
env_var!(FEED_ID);

const DEFAULT_STATIC_ROOT: &str = "./static";

#[nutype(derive(Clone, Debug), sanitize(trim), validate(not_empty))]
pub struct Username(String);

#[nutype(derive(Clone), validate(not_empty))]
pub struct Password(String);

#[nutype(derive(Clone, Debug), sanitize(trim), validate(not_empty))]
pub struct StaticRoot(String);

#[nutype(derive(Clone, Debug), sanitize(trim), validate(not_empty))]
pub struct FeedsTab(String);

fn load_configuration() -> anyhow::Result<Configuration> {
    let configuration =
        Configuration::new(env_load!(BasePath, SLA_API_BASE_PATH));
    debug!("SLA API base path: {}", configuration.base_path);

    let Some(username) = env_load_opt!(Username, SLA_API_USERNAME) else {
        return Ok(configuration);
    };
    let password = env_load_opt!(Password, SLA_API_PASSWORD);
    debug!("username: {:?}", username);
    debug!("password?: {:?}", password.is_some());

    Ok(configuration.with_basic_auth(
        username.into_inner(),
        password.map(Password::into_inner),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = helper::init::init_subscriber(
        "feed_manager".to_string(),
        "info".to_string(),
    )?;
    debug!("Tracing initialized.");

    let http_client =
        Arc::new(ClientBuilder::new(reqwest::Client::new()).build());
    let api = Arc::new(SlaApiClient::new(load_configuration()?, http_client));
    let sla_service = SlaService::new(api as Arc<dyn SlaApi>);

    let static_root = env_load_opt!(StaticRoot, STATIC_ROOT)
        .map(StaticRoot::into_inner)
        .unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string());
    let controllers = feeds::controller_modules()
        .into_iter()
        .fold(CatalogLoader::new(), CatalogLoader::with_module);

    let application = Application::bootstrap(
        Arc::new(controllers),
        Arc::new(FsAssetLoader::new(static_root)),
        vec![feed_mgr::module(), feeds::module()],
    )
    .await
    .context("Failed to register the UI modules")?;

    let mut params = BTreeMap::new();
    if let Some(tab) = env_load_opt!(FeedsTab, FEEDS_TAB) {
        params.insert(
            feeds::TAB_PARAM.to_string(),
            Value::String(tab.into_inner()),
        );
    }
    let activation = application
        .router()
        .go(feeds::STATE_NAME, params)
        .await
        .with_context(|| format!("Failed to enter {}", feeds::STATE_NAME))?;
    info!(
        "{} ready at {} with {:?}",
        activation.state.data.display_name,
        activation.state.url,
        activation.params
    );

    if let Some(feed_id) = env_load_opt!(FeedId, FEED_ID) {
        let slas = sla_service.get_feed_slas(&feed_id).await.with_context(
            || format!("Failed to list the SLAs of feed {}", feed_id),
        )?;
        info!("Feed {} has {} SLAs", feed_id, slas.len());
        println!("{}", serde_json::to_string_pretty(&slas)?);
    }

    Ok(())
}
