pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod models;
pub mod paths;
pub mod session;
pub mod store;
