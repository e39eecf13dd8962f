use crate::belt::{ADULT_BELTS, Belt, KID_BELTS};
use crate::unknown_value::UnknownValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum AthleteCategory {
    #[serde(rename = "kid", alias = "kids")]
    Kid,
    #[serde(rename = "adult")]
    Adult,
}

impl AthleteCategory {
    pub const ALL: [AthleteCategory; 2] = [AthleteCategory::Kid, AthleteCategory::Adult];

    pub fn value(&self) -> &'static str {
        match self {
            AthleteCategory::Kid => "kid",
            AthleteCategory::Adult => "adult",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AthleteCategory::Kid => "Bambino",
            AthleteCategory::Adult => "Adulto",
        }
    }

    /// Belts an athlete of this category may hold, from lowest to highest rank.
    pub fn belts(&self) -> &'static [Belt] {
        match self {
            AthleteCategory::Kid => &KID_BELTS,
            AthleteCategory::Adult => &ADULT_BELTS,
        }
    }
}

impl FromStr for AthleteCategory {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kid" | "kids" => Ok(AthleteCategory::Kid),
            "adult" => Ok(AthleteCategory::Adult),
            _ => Err(UnknownValue(s.to_owned())),
        }
    }
}
