use serde_json::Value;
use std::collections::BTreeMap;

use crate::lazy::LazyController;
use crate::loader::ControllerModule;
use crate::module::UiModule;
use crate::state::{RouteState, StateMetadata, ViewBinding};

pub const MODULE_NAME: &str = "kylo.feedmgr.feeds";
pub const STATE_NAME: &str = "feeds";
pub const URL: &str = "/feeds";
pub const TAB_PARAM: &str = "tab";
pub const VIEW: &str = "content";
pub const TEMPLATE_URL: &str = "js/feed-mgr/feeds/feeds-table.html";
pub const CONTROLLER: &str = "FeedsTableController";
pub const CONTROLLER_PATH: &str = "feed-mgr/feeds/FeedsTableController";
pub const MODULE_REQUIRE: &str = "feed-mgr/feeds/module-require";
pub const RESOLVE_NAME: &str = "loadMyCtrl";

/// The feeds table: the root of the feed manager breadcrumb.
pub fn state() -> RouteState {
    RouteState {
        name:    STATE_NAME.to_string(),
        url:     URL.to_string(),
        params:  BTreeMap::from([(TAB_PARAM.to_string(), Value::Null)]),
        views:   BTreeMap::from([(VIEW.to_string(), ViewBinding {
            template_url:  TEMPLATE_URL.to_string(),
            controller:    CONTROLLER.to_string(),
            controller_as: "vm".to_string(),
        })]),
        resolve: BTreeMap::from([(
            RESOLVE_NAME.to_string(),
            LazyController::new(CONTROLLER_PATH, vec![
                MODULE_REQUIRE.to_string()
            ]),
        )]),
        data:    StateMetadata {
            breadcrumb_root: true,
            display_name:    "Feeds".to_string(),
            module:          MODULE_NAME.to_string(),
        },
    }
}

pub fn module() -> UiModule { UiModule::new(MODULE_NAME).with_state(state()) }

/// Modules the lazy controller of [state] loads.
pub fn controller_modules() -> Vec<ControllerModule> {
    vec![
        ControllerModule::new(MODULE_REQUIRE),
        ControllerModule::new(CONTROLLER_PATH).with_controller(CONTROLLER),
    ]
}
