use diacritics::remove_diacritics;
use log::error;
use std::fmt::Debug;

pub mod env_args;
pub mod web;

/// Lowercase, accent-free and single-spaced version of a text, for searching.
pub fn normalize(value: &str) -> String {
    remove_diacritics(value)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Log the error and hand back `value_to_return`, for use in `map_err`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log a message along with the error and hand back `value_to_return`, for use in `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_normalize() {
        assert_eq!("nicolo d'amico", normalize("  Nicolò   D'Amico "));
    }

    #[test]
    fn should_log_error_and_return_value() {
        init_logger();

        let expected_return_value = "test";
        let result = log_error_and_return(expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_error_and_message_and_return_value() {
        init_logger();

        let expected_message = "This is a test message";
        let expected_return_value = "This is a test return value";
        let result =
            log_message_and_return(expected_message, expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }
}
