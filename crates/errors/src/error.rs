use std::borrow::Cow;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use libs::anyhow::Error;

pub fn custom_error(class: &'static str, message: impl Into<Cow<'static, str>>) -> Error {
    CustomError {
        class,
        message: message.into(),
    }
    .into()
}

pub fn generic_error(message: impl Into<Cow<'static, str>>) -> Error {
    custom_error("Error", message)
}

/// A required or malformed startup value. Startup errors of this class are
/// never retried, the process has to be restarted with a fixed environment.
pub fn configuration_error(message: impl Into<Cow<'static, str>>) -> Error {
    custom_error("ConfigurationError", message)
}

pub fn invalid_env_value(name: &str, value: &str) -> Error {
    configuration_error(format!("Invalid value for {}: '{}'", name, value))
}

/// A simple error type that lets the creator specify both the error message and
/// the error class name. This type is private; externally it only ever appears
/// wrapped in an `anyhow::Error`. To retrieve the error class name from a wrapped
/// `CustomError`, use the function `get_custom_error_class()`.
#[derive(Debug)]
struct CustomError {
    class: &'static str,
    message: Cow<'static, str>,
}

impl Display for CustomError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CustomError {}

/// If this error was crated with `custom_error()`, return the specified error
/// class name. In all other cases this function returns `None`.
pub fn get_custom_error_class(error: &Error) -> Option<&'static str> {
    error.downcast_ref::<CustomError>().map(|e| e.class)
}
