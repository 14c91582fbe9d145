//! Value domain and options shared by all generators.
//!
//! An "any" value stands in for a value whose exact identity is irrelevant
//! to the test. Generators receive a read-only [`GenerationOptions`] and
//! produce an [`AnyValue`]; bound validation happens here, before any
//! generation that accepts `min`/`max` runs.

use crate::registry::GeneratorKey;
use serde::{Deserialize, Serialize};

/// A generated primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyValue {
    Number(f64),
    Int(i64),
    String(String),
    Symbol(Symbol),
}

impl AnyValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyValue::String(s) => Some(s),
            AnyValue::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// The kind of this value, for error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyValue::Number(_) => "number",
            AnyValue::Int(_) => "int",
            AnyValue::String(_) => "string",
            AnyValue::Symbol(_) => "symbol",
        }
    }
}

/// A short identifier-like value, the symbol domain of the string generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Symbol {
        Symbol(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// Constraints a caller may put on a generated value.
///
/// Generators treat this as read-only input; which entries apply depends on
/// the primitive (`min`/`max` bound lengths and word counts, the sign flags
/// apply to numbers). `positive` wins over `negative` when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub positive: bool,
    pub negative: bool,
}

impl GenerationOptions {
    pub fn new() -> GenerationOptions {
        GenerationOptions::default()
    }

    pub fn with_min(mut self, min: i64) -> GenerationOptions {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: i64) -> GenerationOptions {
        self.max = Some(max);
        self
    }

    pub fn positive(mut self) -> GenerationOptions {
        self.positive = true;
        self
    }

    pub fn negative(mut self) -> GenerationOptions {
        self.negative = true;
        self
    }
}

/// Errors raised by generation and dispatch.
///
/// All of these are programmer errors in test authorship; none is clamped,
/// defaulted, or retried.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyError {
    /// Both bounds were given and `min > max`
    MinExceedsMax { min: i64, max: i64 },
    /// A bound was given that is not strictly positive
    NonPositiveBound(i64),
    /// Dispatch hit a key that was never registered
    UnknownGenerator(GeneratorKey),
    /// A typed helper dispatched its key and got back a different kind of
    /// value, which happens when the key was re-registered to something else
    UnexpectedKind {
        key: GeneratorKey,
        expected: &'static str,
        got: &'static str,
    },
}

impl std::fmt::Display for AnyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyError::MinExceedsMax { min, max } => {
                write!(f, "min {} exceeds max {}", min, max)
            }
            AnyError::NonPositiveBound(bound) => {
                write!(f, "bounds must be positive, got {}", bound)
            }
            AnyError::UnknownGenerator(key) => {
                write!(f, "no generator registered under {}", key)
            }
            AnyError::UnexpectedKind { key, expected, got } => {
                write!(f, "generator under {} produced {}, expected {}", key, got, expected)
            }
        }
    }
}

impl std::error::Error for AnyError {}

/// Validate a `min`/`max` option pair before generation.
///
/// Checks run in a fixed order so a caller always sees the same failure for
/// the same input: ordering first, then positivity of each bound.
pub fn validate_bounds(min: Option<i64>, max: Option<i64>) -> Result<(), AnyError> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AnyError::MinExceedsMax { min, max });
        }
    }
    if let Some(min) = min {
        if min <= 0 {
            return Err(AnyError::NonPositiveBound(min));
        }
    }
    if let Some(max) = max {
        if max <= 0 {
            return Err(AnyError::NonPositiveBound(max));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bound_pairs_pass() {
        assert_eq!(validate_bounds(None, None), Ok(()));
        assert_eq!(validate_bounds(Some(1), None), Ok(()));
        assert_eq!(validate_bounds(None, Some(10)), Ok(()));
        assert_eq!(validate_bounds(Some(3), Some(3)), Ok(()));
        assert_eq!(validate_bounds(Some(1), Some(255)), Ok(()));
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        assert_eq!(
            validate_bounds(Some(10), Some(3)),
            Err(AnyError::MinExceedsMax { min: 10, max: 3 })
        );
    }

    #[test]
    fn test_non_positive_bounds_are_rejected() {
        // Same cases the original suite ran: (-10,1), (0,1), (0,0), (0,-10)
        assert_eq!(
            validate_bounds(Some(-10), Some(1)),
            Err(AnyError::NonPositiveBound(-10))
        );
        assert_eq!(
            validate_bounds(Some(0), Some(1)),
            Err(AnyError::NonPositiveBound(0))
        );
        assert_eq!(
            validate_bounds(Some(0), Some(0)),
            Err(AnyError::NonPositiveBound(0))
        );
        // min > max is checked first, so this pair reports the ordering
        assert_eq!(
            validate_bounds(Some(0), Some(-10)),
            Err(AnyError::MinExceedsMax { min: 0, max: -10 })
        );
        assert_eq!(
            validate_bounds(None, Some(-1)),
            Err(AnyError::NonPositiveBound(-1))
        );
    }

    #[test]
    fn test_options_builder() {
        let options = GenerationOptions::new().with_min(2).with_max(20).positive();
        assert_eq!(options.min, Some(2));
        assert_eq!(options.max, Some(20));
        assert!(options.positive);
        assert!(!options.negative);
    }

    #[test]
    fn test_symbol_display_and_len() {
        let symbol = Symbol::new("lorem");
        assert_eq!(format!("{}", symbol), ":lorem");
        assert_eq!(symbol.len(), 5);
        assert!(!symbol.is_empty());
    }

    #[test]
    fn test_any_value_serializes() {
        let value = AnyValue::Int(17);
        let json = serde_json::to_string(&value).unwrap();
        let back: AnyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
