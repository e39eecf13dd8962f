pub mod error;
pub mod expiration;
pub mod expired;
pub mod latest;
pub mod pricing;
pub mod stats;
