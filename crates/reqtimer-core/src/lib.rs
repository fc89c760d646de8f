pub mod config;
pub mod logging;

pub mod fetch;
pub mod stats;
pub mod timer;
pub mod url_model;
