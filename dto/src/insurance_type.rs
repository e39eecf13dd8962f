use crate::unknown_value::UnknownValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum InsuranceType {
    A,
    B,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 2] = [InsuranceType::A, InsuranceType::B];

    pub fn value(&self) -> &'static str {
        match self {
            InsuranceType::A => "A",
            InsuranceType::B => "B",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::A => "Tipologia A",
            InsuranceType::B => "Tipologia B",
        }
    }
}

impl FromStr for InsuranceType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InsuranceType::ALL
            .into_iter()
            .find(|insurance_type| insurance_type.value() == s)
            .ok_or_else(|| UnknownValue(s.to_owned()))
    }
}
