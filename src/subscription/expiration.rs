use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use dto::date_format::start_of_day;
use dto::plan_type::PlanType;

/// Billing cycles are anchored on that day of the month, whatever the start date.
pub const BILLING_DAY: u32 = 15;

/// Expiration of a subscription starting on `start_date`:
/// the start date is moved to the 15th of its month, then the plan duration is added.
pub fn subscription_expiration(start_date: &NaiveDate, plan_type: &PlanType) -> Option<NaiveDate> {
    start_date
        .with_day(BILLING_DAY)?
        .checked_add_months(Months::new(plan_type.months()))
}

/// Same as [subscription_expiration], as the instant stored by the backend (midnight UTC).
pub fn subscription_expiration_instant(
    start_date: &NaiveDate,
    plan_type: &PlanType,
) -> Option<DateTime<Utc>> {
    subscription_expiration(start_date, plan_type).map(start_of_day)
}
