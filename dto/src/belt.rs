use crate::category::AthleteCategory;
use crate::unknown_value::UnknownValue;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Belt {
    White,
    Blue,
    Purple,
    Brown,
    Black,

    GreyWhite,
    Grey,
    GreyBlack,

    YellowWhite,
    Yellow,
    YellowBlack,

    OrangeWhite,
    Orange,
    OrangeBlack,

    GreenWhite,
    Green,
    GreenBlack,
}

pub const ADULT_BELTS: [Belt; 5] = [
    Belt::White,
    Belt::Blue,
    Belt::Purple,
    Belt::Brown,
    Belt::Black,
];

pub const KID_BELTS: [Belt; 13] = [
    Belt::White,
    Belt::GreyWhite,
    Belt::Grey,
    Belt::GreyBlack,
    Belt::YellowWhite,
    Belt::Yellow,
    Belt::YellowBlack,
    Belt::OrangeWhite,
    Belt::Orange,
    Belt::OrangeBlack,
    Belt::GreenWhite,
    Belt::Green,
    Belt::GreenBlack,
];

impl Belt {
    /// Value used on the wire and in select options.
    pub fn value(&self) -> &'static str {
        match self {
            Belt::White => "white",
            Belt::Blue => "blue",
            Belt::Purple => "purple",
            Belt::Brown => "brown",
            Belt::Black => "black",
            Belt::GreyWhite => "greywhite",
            Belt::Grey => "grey",
            Belt::GreyBlack => "greyblack",
            Belt::YellowWhite => "yellowwhite",
            Belt::Yellow => "yellow",
            Belt::YellowBlack => "yellowblack",
            Belt::OrangeWhite => "orangewhite",
            Belt::Orange => "orange",
            Belt::OrangeBlack => "orangeblack",
            Belt::GreenWhite => "greenwhite",
            Belt::Green => "green",
            Belt::GreenBlack => "greenblack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Belt::White => "Bianca",
            Belt::Blue => "Blu",
            Belt::Purple => "Viola",
            Belt::Brown => "Marrone",
            Belt::Black => "Nera",
            Belt::GreyWhite => "Grigio Bianca",
            Belt::Grey => "Grigia",
            Belt::GreyBlack => "Grigio Nera",
            Belt::YellowWhite => "Gialla Bianca",
            Belt::Yellow => "Gialla",
            Belt::YellowBlack => "Gialla Nera",
            Belt::OrangeWhite => "Arancio Bianca",
            Belt::Orange => "Arancio",
            Belt::OrangeBlack => "Arancio Nera",
            Belt::GreenWhite => "Verde Bianca",
            Belt::Green => "Verde",
            Belt::GreenBlack => "Verde Nera",
        }
    }

    pub fn is_valid_for(&self, category: &AthleteCategory) -> bool {
        category.belts().contains(self)
    }
}

impl FromStr for Belt {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KID_BELTS
            .iter()
            .chain(ADULT_BELTS.iter())
            .find(|belt| belt.value() == s)
            .copied()
            .ok_or_else(|| UnknownValue(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        belt = {Belt::White, Belt::Blue, Belt::Black, Belt::GreyWhite, Belt::GreenBlack},
        expected_for_kid = {true, false, false, true, true},
        expected_for_adult = {true, true, true, false, false}
    )]
    fn should_check_belt_eligibility(belt: Belt, expected_for_kid: bool, expected_for_adult: bool) {
        assert_eq!(expected_for_kid, belt.is_valid_for(&AthleteCategory::Kid));
        assert_eq!(expected_for_adult, belt.is_valid_for(&AthleteCategory::Adult));
    }

    #[test]
    fn serialized_value_should_match_option_value() {
        for belt in KID_BELTS.iter().chain(ADULT_BELTS.iter()) {
            let serialized = serde_json::to_string(belt).unwrap();
            assert_eq!(format!(r#""{}""#, belt.value()), serialized);
            assert_eq!(Ok(*belt), belt.value().parse());
        }
    }

    #[test]
    fn should_not_parse_unknown_belt() {
        assert_eq!(Err(UnknownValue("red".to_owned())), "red".parse::<Belt>());
    }
}
