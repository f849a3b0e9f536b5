//! Registration of the feed manager UI modules and of their router states.
//!
//! A state names the controllers its views need; their code is only loaded
//! through a [loader::ControllerLoader] the first time the state is entered.

pub mod application;
pub mod asset;
pub mod feed_mgr;
pub mod feeds;
pub mod lazy;
pub mod loader;
pub mod module;
pub mod registry;
pub mod state;

pub use application::Application;
pub use registry::{Activation, NavigationError, RegistryError, StateRegistry};
