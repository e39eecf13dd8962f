//! Business rules of a martial-arts school membership manager:
//! athletes, subscriptions, what is derived from them, and the forms editing them.

pub mod api;
pub mod athlete;
pub mod compliance;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod state;
pub mod subscription;
pub mod tools;
