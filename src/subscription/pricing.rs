use crate::subscription::error::PricingError;
use crate::subscription::error::PricingError::{InvalidAmount, InvalidDiscount};
use dto::category::AthleteCategory;
use dto::plan_type::PlanType;

/// Price list of the school, in euros.
pub fn list_price(category: &AthleteCategory, plan_type: &PlanType) -> f64 {
    match (category, plan_type) {
        (AthleteCategory::Adult, PlanType::Month) => 80.0,
        (AthleteCategory::Adult, PlanType::Quarterly) => 210.0,
        (AthleteCategory::Kid, PlanType::Month) => 60.0,
        (AthleteCategory::Kid, PlanType::Quarterly) => 150.0,
    }
}

/// `base` minus `discount_percent`% of it.
/// A base that is not a number yields 0 rather than propagating garbage.
pub fn discounted_price(base: f64, discount_percent: f64) -> f64 {
    if !base.is_finite() {
        return 0.0;
    }

    base - base * discount_percent / 100.0
}

/// Parse an amount typed by a user. Both `72.5` and `72,5` are accepted.
pub fn parse_amount(value: &str) -> Result<f64, PricingError> {
    parse_number(value)
        .filter(|amount| *amount >= 0.0)
        .ok_or_else(|| InvalidAmount(value.to_owned()))
}

/// Parse a discount percentage typed by a user. A blank value means no discount.
pub fn parse_discount(value: &str) -> Result<f64, PricingError> {
    if value.trim().is_empty() {
        return Ok(0.0);
    }

    parse_number(value)
        .filter(|discount| (0.0..=100.0).contains(discount))
        .ok_or_else(|| InvalidDiscount(value.to_owned()))
}

/// Render an amount without useless decimals, e.g. `80` or `72.5`.
pub fn format_amount(amount: f64) -> String {
    format!("{amount}")
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        base = {100.0, 100.0, 80.0, 210.0, 0.0},
        discount = {10.0, 0.0, 25.0, 100.0, 50.0},
        expected = {90.0, 100.0, 60.0, 0.0, 0.0}
    )]
    fn should_apply_discount(base: f64, discount: f64, expected: f64) {
        assert_eq!(expected, discounted_price(base, discount));
    }

    #[parameterized(base = {f64::NAN, f64::INFINITY})]
    fn should_not_discount_invalid_base(base: f64) {
        assert_eq!(0.0, discounted_price(base, 10.0));
    }

    #[parameterized(
        category = {AthleteCategory::Adult, AthleteCategory::Adult, AthleteCategory::Kid, AthleteCategory::Kid},
        plan_type = {PlanType::Month, PlanType::Quarterly, PlanType::Month, PlanType::Quarterly},
        expected = {80.0, 210.0, 60.0, 150.0}
    )]
    fn should_give_list_price(category: AthleteCategory, plan_type: PlanType, expected: f64) {
        assert_eq!(expected, list_price(&category, &plan_type));
    }

    #[parameterized(
        value = {"80", " 72.5 ", "72,5", "0"},
        expected = {80.0, 72.5, 72.5, 0.0}
    )]
    fn should_parse_amount(value: &str, expected: f64) {
        assert_eq!(Ok(expected), parse_amount(value));
    }

    #[parameterized(value = {"", "abc", "-5", "NaN", "inf", "80 €"})]
    fn should_not_parse_amount(value: &str) {
        assert_eq!(Err(InvalidAmount(value.to_owned())), parse_amount(value));
    }

    #[parameterized(
        value = {"", "  ", "10", "12,5", "100"},
        expected = {0.0, 0.0, 10.0, 12.5, 100.0}
    )]
    fn should_parse_discount(value: &str, expected: f64) {
        assert_eq!(Ok(expected), parse_discount(value));
    }

    #[parameterized(value = {"-1", "101", "ten"})]
    fn should_not_parse_discount(value: &str) {
        assert_eq!(Err(InvalidDiscount(value.to_owned())), parse_discount(value));
    }

    #[parameterized(
        amount = {80.0, 72.5, 0.0},
        expected = {"80", "72.5", "0"}
    )]
    fn should_format_amount(amount: f64, expected: &str) {
        assert_eq!(expected, format_amount(amount));
    }
}
