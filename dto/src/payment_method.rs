use crate::unknown_value::UnknownValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    PayPal,
    Other,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::PayPal,
        PaymentMethod::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "banktransfer",
            PaymentMethod::PayPal => "paypal",
            PaymentMethod::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Contanti",
            PaymentMethod::BankTransfer => "Bonifico Bancario",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::Other => "Altro",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.value() == s)
            .ok_or_else(|| UnknownValue(s.to_owned()))
    }
}
