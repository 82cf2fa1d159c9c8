//! Payload validation shared by create and update.
//!
//! Validators walk a JSON payload field by field in schema order and stop at
//! the first violation. Messages quote the wire field name, for example
//! `"questionCount" must be greater than or equal to 1`.

use serde_json::{Map, Value};
use thiserror::Error;

/// Upper bound for integer fields; the store keeps them as 32-bit integers.
pub const MAX_INTEGER_FIELD: i64 = 2_147_483_647;

/// First schema violation found in a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn required(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }

    fn not_a_string(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" must be a string"))
    }

    fn empty(field: &str) -> Self {
        Self::new(field, format!("\"{field}\" is not allowed to be empty"))
    }

    /// Wire name of the offending field (`"value"` for the payload itself).
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Human-readable description of the violation.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Closed string enumerations accepted on the wire.
pub trait WireEnum: Sized + Copy + 'static {
    /// Every accepted spelling, in declaration order.
    const VARIANTS: &'static [Self];

    /// Wire spelling of the variant.
    fn as_str(&self) -> &'static str;

    /// Parse a wire spelling; matching is case-sensitive.
    #[must_use]
    fn from_wire(raw: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == raw)
    }

    /// Render the accepted spellings as `[a, b, c]`.
    #[must_use]
    fn allowed() -> String {
        let names: Vec<&str> = Self::VARIANTS.iter().map(Self::as_str).collect();
        format!("[{}]", names.join(", "))
    }
}

/// Cursor over a JSON object that records which keys the schema declares.
pub(crate) struct PayloadReader<'a> {
    object: &'a Map<String, Value>,
    declared: Vec<&'static str>,
}

impl<'a> PayloadReader<'a> {
    pub(crate) fn new(payload: &'a Value) -> Result<Self, ValidationError> {
        let object = payload
            .as_object()
            .ok_or_else(|| ValidationError::new("value", "\"value\" must be of type object"))?;
        Ok(Self {
            object,
            declared: Vec::new(),
        })
    }

    fn present(&mut self, field: &'static str) -> Result<&'a Value, ValidationError> {
        self.declared.push(field);
        self.object
            .get(field)
            .ok_or_else(|| ValidationError::required(field))
    }

    /// Read a required, non-empty string.
    ///
    /// NUL characters are rejected because the PostgreSQL store cannot hold
    /// them in `TEXT` columns.
    pub(crate) fn string(&mut self, field: &'static str) -> Result<String, ValidationError> {
        let value = self
            .present(field)?
            .as_str()
            .ok_or_else(|| ValidationError::not_a_string(field))?;
        if value.is_empty() {
            return Err(ValidationError::empty(field));
        }
        if value.contains('\0') {
            return Err(ValidationError::new(
                field,
                format!("\"{field}\" must not contain NUL characters"),
            ));
        }
        Ok(value.to_owned())
    }

    /// Read a required integer no smaller than `min`.
    pub(crate) fn integer(&mut self, field: &'static str, min: i64) -> Result<u32, ValidationError> {
        let number = self
            .present(field)?
            .as_number()
            .ok_or_else(|| ValidationError::new(field, format!("\"{field}\" must be a number")))?;
        let below = || {
            ValidationError::new(
                field,
                format!("\"{field}\" must be greater than or equal to {min}"),
            )
        };
        let above = || {
            ValidationError::new(
                field,
                format!("\"{field}\" must be less than or equal to {MAX_INTEGER_FIELD}"),
            )
        };

        let value = if let Some(signed) = number.as_i64() {
            signed
        } else if number.is_u64() {
            return Err(above());
        } else {
            integral_float(number.as_f64().unwrap_or(f64::NAN))
                .ok_or_else(|| ValidationError::new(field, format!("\"{field}\" must be an integer")))?
        };

        if value < min {
            return Err(below());
        }
        if value > MAX_INTEGER_FIELD {
            return Err(above());
        }
        u32::try_from(value).map_err(|_| below())
    }

    /// Read a required member of a closed enumeration.
    pub(crate) fn one_of<E: WireEnum>(&mut self, field: &'static str) -> Result<E, ValidationError> {
        let value = self.present(field)?;
        value.as_str().and_then(E::from_wire).ok_or_else(|| {
            ValidationError::new(field, format!("\"{field}\" must be one of {}", E::allowed()))
        })
    }

    /// Reject keys the schema does not declare.
    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        match self
            .object
            .keys()
            .find(|key| !self.declared.contains(&key.as_str()))
        {
            Some(unknown) => Err(ValidationError::new(
                unknown.as_str(),
                format!("\"{unknown}\" is not allowed"),
            )),
            None => Ok(()),
        }
    }
}

/// Return the integral value of `raw`, or `None` when it has a fraction.
///
/// Float-to-integer casts saturate, so huge values still fail the bound checks.
#[expect(
    clippy::cast_possible_truncation,
    reason = "only integral values reach the cast, and the cast saturates"
)]
fn integral_float(raw: f64) -> Option<i64> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        return None;
    }
    Some(raw as i64)
}
