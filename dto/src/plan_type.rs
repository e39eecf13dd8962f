use crate::unknown_value::UnknownValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Duration class of a subscription.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Month,
    Quarterly,
}

impl PlanType {
    pub const ALL: [PlanType; 2] = [PlanType::Month, PlanType::Quarterly];

    pub fn value(&self) -> &'static str {
        match self {
            PlanType::Month => "month",
            PlanType::Quarterly => "quarterly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Month => "Mensile",
            PlanType::Quarterly => "Trimestrale",
        }
    }

    /// Number of months covered by the plan.
    pub fn months(&self) -> u32 {
        match self {
            PlanType::Month => 1,
            PlanType::Quarterly => 3,
        }
    }
}

impl FromStr for PlanType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanType::ALL
            .into_iter()
            .find(|plan_type| plan_type.value() == s)
            .ok_or_else(|| UnknownValue(s.to_owned()))
    }
}
