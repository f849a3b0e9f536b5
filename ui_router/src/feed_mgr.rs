use crate::module::UiModule;

pub const MODULE_NAME: &str = "kylo.feedmgr";

/// Stylesheets shared by the feed manager views, in load order.
pub const STYLESHEETS: [&str; 3] = [
    "bower_components/angular-ui-grid/ui-grid.css",
    "assets/ui-grid-material.css",
    "js/feed-mgr/shared/cron-expression-preview/cron-expression-preview.css",
];

pub fn module() -> UiModule {
    UiModule::new(MODULE_NAME)
        .with_requires(["ui.codemirror"])
        .with_run_assets(STYLESHEETS)
}
