pub mod athlete_form;
pub mod engine;
pub mod error;
pub mod field;
pub mod subscription_form;
