pub mod app;
pub mod catalog;
pub mod config;
pub mod install;
pub mod resolve;
pub mod version;
