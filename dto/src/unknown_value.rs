use thiserror::Error;

/// Returned when a string does not match any variant of one of the closed enumerations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown value [value: {0}]")]
pub struct UnknownValue(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unknown_value() {
        assert_eq!(
            "Unknown value [value: weekly]",
            UnknownValue("weekly".to_owned()).to_string()
        );
    }
}
