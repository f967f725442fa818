//! Backend values the client never interprets.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A value returned by the prediction service and shown verbatim.
///
/// Predictions, actual values and request ids are passed through as raw JSON
/// so that whatever the backend sends (string, integer, float) round-trips
/// unchanged.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opaque(pub Value);

impl Opaque {
    /// Whether the value counts as "present" when deciding what to display.
    ///
    /// Null, `false`, zero and the empty string are treated as absent.
    pub fn is_truthy(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl fmt::Display for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            Value::Null => Ok(()),
            // Whole floats print without a fraction, as a browser would show them.
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(x) if x == 0.0 => f.write_str("0"),
                Some(x) if x.fract() == 0.0 && x.abs() < 1e21 => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Opaque {
    fn from(s: &str) -> Self {
        Opaque(Value::String(s.to_string()))
    }
}

impl From<String> for Opaque {
    fn from(s: String) -> Self {
        Opaque(Value::String(s))
    }
}

impl From<Value> for Opaque {
    fn from(v: Value) -> Self {
        Opaque(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(Opaque(json!("42")).to_string(), "42");
        assert_eq!(Opaque(json!(120)).to_string(), "120");
        assert_eq!(Opaque(json!(87.25)).to_string(), "87.25");
        assert_eq!(Opaque(json!(-3)).to_string(), "-3");
        assert_eq!(Opaque(Value::Null).to_string(), "");
    }

    #[test]
    fn test_whole_floats_drop_fraction() {
        assert_eq!(Opaque(json!(131.0)).to_string(), "131");
        assert_eq!(Opaque(json!(120.0)).to_string(), "120");
        assert_eq!(Opaque(json!(-0.0)).to_string(), "0");
        assert_eq!(Opaque(json!(118.5)).to_string(), "118.5");
    }

    #[test]
    fn test_truthiness() {
        assert!(Opaque(json!("abc")).is_truthy());
        assert!(Opaque(json!(3)).is_truthy());
        assert!(!Opaque(json!(0)).is_truthy());
        assert!(!Opaque(json!(0.0)).is_truthy());
        assert!(!Opaque(json!("")).is_truthy());
        assert!(!Opaque(Value::Null).is_truthy());
        assert!(!Opaque(json!(false)).is_truthy());
    }
}
