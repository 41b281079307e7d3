//! A service for greeting the caller.

use tracing::instrument;

/// Returns the greeting.
// The handler already logs each call at info, so the return value
// is only traced at debug.
#[instrument(ret(level = "debug"))]
pub fn hello() -> String {
    "Hello, World!".to_string()
}

#[cfg(test)]
mod tests {
    use super::hello;

    #[test]
    fn hello_returns_the_fixed_greeting() {
        assert_eq!("Hello, World!", hello());
    }

    #[test]
    fn hello_is_stable_across_calls() {
        assert_eq!(hello(), hello());
    }
}
