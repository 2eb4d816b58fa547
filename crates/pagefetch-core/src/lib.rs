pub mod config;
pub mod logging;

pub mod dispatcher;
pub mod fetcher;
pub mod pages;
pub mod plan;
pub mod storage;
pub mod url_model;
