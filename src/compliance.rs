use crate::compliance::ComplianceStatus::{Absent, Active, Expired};
use chrono::{DateTime, Months, NaiveDate, Utc};

/// Medical certificates and insurances are valid for that long after their release date.
const COMPLIANCE_VALIDITY_MONTHS: u32 = 12;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ComplianceStatus {
    Active,
    Expired,
    Absent,
}

impl ComplianceStatus {
    /// Italian label. Insurance takes the feminine form ("assicurazione").
    pub fn label(&self, feminine: bool) -> &'static str {
        match (self, feminine) {
            (Active, false) => "attivo",
            (Active, true) => "attiva",
            (Expired, false) => "scaduto",
            (Expired, true) => "scaduta",
            (Absent, _) => "Assente",
        }
    }
}

/// Something expiring exactly at `as_of` is no longer active.
pub fn is_active(expiration: &DateTime<Utc>, as_of: &DateTime<Utc>) -> bool {
    expiration > as_of
}

pub fn compute_compliance_status(
    expiration: Option<&DateTime<Utc>>,
    as_of: &DateTime<Utc>,
) -> ComplianceStatus {
    match expiration {
        None => Absent,
        Some(expiration) => {
            if is_active(expiration, as_of) {
                Active
            } else {
                Expired
            }
        }
    }
}

/// Expiration of a medical certificate or an insurance, given its release or start date.
pub fn compliance_expiration(release_date: NaiveDate) -> Option<NaiveDate> {
    release_date.checked_add_months(Months::new(COMPLIANCE_VALIDITY_MONTHS))
}
