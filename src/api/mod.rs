pub mod athletes;
pub mod client;
pub mod config;
pub mod error;
pub mod login;
pub mod subscriptions;
