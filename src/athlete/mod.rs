pub mod age;
pub mod alerts;
pub mod belts;
pub mod filter;
pub mod names;
pub mod profile;
