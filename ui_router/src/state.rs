use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::lazy::LazyController;

/// What a named view region of the layout renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBinding {
    pub template_url:  String,
    pub controller:    String,
    pub controller_as: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMetadata {
    /// The state starts a new breadcrumb trail.
    pub breadcrumb_root: bool,
    pub display_name:    String,
    /// Name of the UI module declaring the state.
    pub module:          String,
}

/// A router state. Immutable once registered.
#[derive(Debug)]
pub struct RouteState {
    pub name:    String,
    pub url:     String,
    /// Accepted parameters and their default, `null` meaning none.
    pub params:  BTreeMap<String, Value>,
    /// View region -> binding.
    pub views:   BTreeMap<String, ViewBinding>,
    /// Dependencies resolved before entering the state.
    pub resolve: BTreeMap<String, LazyController>,
    pub data:    StateMetadata,
}

impl RouteState {
    /// Whether `url` designates this state, ignoring any query string.
    pub fn matches_url(&self, url: &str) -> bool {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        let own = self.url.trim_end_matches('/');
        path == own
    }
}
