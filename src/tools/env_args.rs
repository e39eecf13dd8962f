#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(not(test))]
use std::env;
use std::ops::Deref;

// region ArgName
/// One or several names of the same arg, e.g. a short alias and a long name.
/// Built from a `&str` or a `Vec<&str>`.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}
impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve value associated to an arg passed to the app, written as `--name=value`.
///
/// /!\ As this works on global variables,
/// a function using `retrieve_arg_value` could be tricky to test.
/// To do so, wrap your test with `with_env_args(args, fn)`.
/// This function is only available in a test context.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let args: Vec<String> = get_env_args();
    let arg_names = arg_names.into();
    for arg in args {
        for arg_name in arg_names.iter() {
            let arg_prefix = format!("{arg_name}=");
            if arg.starts_with(&arg_prefix) {
                return arg.split_once("=").map(|(_, l)| l.to_owned());
            }
        }
    }

    None
}

/// Retrieve an arg value, falling back to an environment variable.
/// Blank values are treated as missing.
pub fn retrieve_setting<'a, A>(arg_names: A, env_var: &str) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    retrieve_arg_value(arg_names)
        .or_else(|| get_env_var(env_var))
        .filter(|value| !value.trim().is_empty())
}

/// Retrieve a setting, or fail with the given error.
pub fn retrieve_expected_setting<'a, A, E>(
    arg_names: A,
    env_var: &str,
    error_if_missing: E,
) -> Result<String, E>
where
    A: Into<ArgName<'a>>,
{
    retrieve_setting(arg_names, env_var).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(not(test))]
fn get_env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test is run with `with_env_args`,
    /// the inner `Vec` is set to whatever param is passed.
    /// It is then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };

    /// Same as `ENV_ARGS`, for environment variables.
    static ENV_VARS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
fn get_env_var(name: &str) -> Option<String> {
    ENV_VARS.with(|vars| vars.borrow().get(name).cloned())
}

#[cfg(test)]
/// When running tests, env args are emulated from within the app.
/// You can set them up from there by wrapping your test with this function.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
/// Same as `with_env_args`, for environment variables.
pub fn with_env_vars<F, T>(vars: Vec<(&str, &str)>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let vars = vars
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
    ENV_VARS.with(|refcell| {
        let old_value = refcell.replace(vars);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use parameterized::{ide, parameterized};

    use crate::tools::env_args::{
        retrieve_arg_value, retrieve_expected_setting, retrieve_setting, with_env_args,
        with_env_vars,
    };

    ide!();

    #[parameterized(
        args = {vec!["-u=http://localhost:3000".to_owned()], vec!["--api-url=http://localhost:3000".to_owned()], vec!["--another-arg=wrong".to_owned()]},
        arg_names = {vec!["-u", "--api-url"], vec!["-u", "--api-url"], vec!["-u", "--api-url"]},
        expected_result = {Some("http://localhost:3000".to_owned()), Some("http://localhost:3000".to_owned()), None}
    )]
    fn should_retrieve_arg_value(
        args: Vec<String>,
        arg_names: Vec<&str>,
        expected_result: Option<String>,
    ) {
        let result = with_env_args(args, || retrieve_arg_value(arg_names));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn arg_should_take_precedence_over_env_var() {
        let args = vec!["--api-url=http://from-arg".to_owned()];
        let vars = vec![("API_URL", "http://from-env")];

        let result = with_env_vars(vars, || {
            with_env_args(args, || retrieve_setting("--api-url", "API_URL"))
        });

        assert_eq!(Some("http://from-arg".to_owned()), result);
    }

    #[test]
    fn should_fall_back_to_env_var() {
        let vars = vec![("API_URL", "http://from-env")];

        let result = with_env_vars(vars, || retrieve_setting("--api-url", "API_URL"));

        assert_eq!(Some("http://from-env".to_owned()), result);
    }

    #[test]
    fn should_ignore_blank_setting() {
        let args = vec!["--api-url=".to_owned()];

        let result = with_env_args(args, || retrieve_setting("--api-url", "API_URL"));

        assert_eq!(None, result);
    }

    #[test]
    fn should_fail_to_retrieve_expected_setting() {
        let error = "error!";

        let result = retrieve_expected_setting("--api-url", "API_URL", error).unwrap_err();

        assert_eq!(error, result);
    }
}
