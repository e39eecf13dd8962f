pub mod athlete;
pub mod belt;
pub mod category;
pub mod credentials;
pub mod date_format;
pub mod gender;
pub mod insurance_type;
pub mod payment_method;
pub mod plan_type;
pub mod subscription;
pub mod unknown_value;
