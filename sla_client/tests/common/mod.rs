#![allow(dead_code)]

use reqwest_middleware::ClientBuilder;
use sla_client::{BasePath, Configuration, SlaApiClient};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

pub fn configuration(base_path: &str) -> Configuration {
    Configuration::new(BasePath::try_new(base_path.to_string()).unwrap())
}

pub fn client(configuration: Configuration) -> SlaApiClient {
    let http_client =
        Arc::new(ClientBuilder::new(reqwest::Client::new()).build());
    SlaApiClient::new(configuration, http_client)
}

/// Base path of a local port nobody listens on.
pub fn unreachable_base_path() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Counts the error events emitted by this crate.
#[derive(Clone, Debug, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize { self.0.load(Ordering::SeqCst) }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::ERROR
            && metadata.target().starts_with("sla_client")
        {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
