//! Problem data for the two-product mix and its validation.
//!
//! The record mirrors the JSON shape accepted by the CLI:
//!
//! ```json
//! {
//!   "profit": {"A": 40, "B": 30},
//!   "hours":  {"A": 2,  "B": 1},
//!   "labor":  {"A": 1,  "B": 1},
//!   "limits": {"hours": 100, "labor": 80, "B_max": 40}
//! }
//! ```
//!
//! Product `A` is plotted on the x axis, product `B` on the y axis.

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use std::collections::BTreeMap;
use std::fmt;

/// Product on the x axis.
pub const PRODUCT_X: &str = "A";
/// Product on the y axis.
pub const PRODUCT_Y: &str = "B";
/// Both products in axis order.
pub const PRODUCTS: [&str; 2] = [PRODUCT_X, PRODUCT_Y];

/// Errors raised while reading or validating problem data.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// A required key is missing, holds a non-finite number, or the
    /// document could not be decoded (`field` is then the JSON position).
    InvalidDataKind { field: String, reason: String },
}

impl DataError {
    fn missing(field: impl Into<String>) -> Self {
        Self::InvalidDataKind {
            field: field.into(),
            reason: "missing".to_string(),
        }
    }

    fn undecodable(e: &serde_json::Error) -> Self {
        let reason = match e.classify() {
            Category::Syntax | Category::Eof => "malformed JSON",
            Category::Data => "wrong shape",
            Category::Io => "unreadable",
        };
        Self::InvalidDataKind {
            field: format!("line {} column {}", e.line(), e.column()),
            reason: format!("{reason}: {e}"),
        }
    }

    fn non_finite(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidDataKind {
            field: field.into(),
            reason: format!("not a finite number ({value})"),
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDataKind { field, reason } => {
                write!(f, "invalid problem data at `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// Right-hand-side limits. `B_max` is an optional upper bound on product B.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub hours: Option<f64>,
    pub labor: Option<f64>,
    #[serde(rename = "B_max", default, skip_serializing_if = "Option::is_none")]
    pub b_max: Option<f64>,
}

/// Per-product coefficients and resource limits.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemData {
    #[serde(default)]
    pub profit: BTreeMap<String, f64>,
    #[serde(default)]
    pub hours: BTreeMap<String, f64>,
    #[serde(default)]
    pub labor: BTreeMap<String, f64>,
    #[serde(default)]
    pub limits: Limits,
}

impl ProblemData {
    /// Decode from a JSON document. Key presence is checked later, by the
    /// builders that need each key.
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        serde_json::from_str(text).map_err(|e| DataError::undecodable(&e))
    }

    /// Coefficient of `product` in the named per-product map.
    pub fn coefficient(&self, map: Coefficients, product: &str) -> Result<f64, DataError> {
        let (name, values) = match map {
            Coefficients::Profit => ("profit", &self.profit),
            Coefficients::Hours => ("hours", &self.hours),
            Coefficients::Labor => ("labor", &self.labor),
        };
        let field = format!("{name}.{product}");
        let v = *values.get(product).ok_or_else(|| DataError::missing(&field))?;
        finite(field, v)
    }

    /// Coefficients of both products, in axis order.
    pub fn pair(&self, map: Coefficients) -> Result<[f64; 2], DataError> {
        Ok([
            self.coefficient(map, PRODUCT_X)?,
            self.coefficient(map, PRODUCT_Y)?,
        ])
    }

    pub fn hours_limit(&self) -> Result<f64, DataError> {
        let v = self
            .limits
            .hours
            .ok_or_else(|| DataError::missing("limits.hours"))?;
        finite("limits.hours", v)
    }

    pub fn labor_limit(&self) -> Result<f64, DataError> {
        let v = self
            .limits
            .labor
            .ok_or_else(|| DataError::missing("limits.labor"))?;
        finite("limits.labor", v)
    }

    /// Optional bound on product B; `Ok(None)` when not configured.
    pub fn b_max(&self) -> Result<Option<f64>, DataError> {
        self.limits
            .b_max
            .map(|v| finite("limits.B_max", v))
            .transpose()
    }
}

/// The per-product coefficient maps of `ProblemData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coefficients {
    Profit,
    Hours,
    Labor,
}

fn finite(field: impl Into<String>, v: f64) -> Result<f64, DataError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DataError::non_finite(field, v))
    }
}

/// The textbook instance: two machine-hour and labor-hour resources plus an
/// upper bound on B.
pub fn default_data() -> ProblemData {
    let pair = |a: f64, b: f64| {
        BTreeMap::from([(PRODUCT_X.to_string(), a), (PRODUCT_Y.to_string(), b)])
    };
    ProblemData {
        profit: pair(40.0, 30.0),
        hours: pair(2.0, 1.0),
        labor: pair(1.0, 1.0),
        limits: Limits {
            hours: Some(100.0),
            labor: Some(80.0),
            b_max: Some(40.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_original_json_shape() {
        let text = r#"{
            "profit": {"A": 40, "B": 30},
            "hours":  {"A": 2,  "B": 1},
            "labor":  {"A": 1,  "B": 1},
            "limits": {"hours": 100, "labor": 80, "B_max": 40}
        }"#;
        let data = ProblemData::from_json(text).unwrap();
        assert_eq!(data, default_data());
    }

    #[test]
    fn b_max_is_optional() {
        let text = r#"{"hours": {"A": 1, "B": 1}, "labor": {"A": 1, "B": 2},
                       "limits": {"hours": 10, "labor": 12}}"#;
        let data = ProblemData::from_json(text).unwrap();
        assert_eq!(data.b_max().unwrap(), None);
        assert_eq!(data.labor_limit().unwrap(), 12.0);
    }

    #[test]
    fn missing_coefficient_names_the_field() {
        let mut data = default_data();
        data.labor.remove(PRODUCT_Y);
        let err = data.pair(Coefficients::Labor).unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidDataKind {
                field: "labor.B".into(),
                reason: "missing".into()
            }
        );
        assert!(err.to_string().contains("labor.B"));
    }

    #[test]
    fn non_finite_limit_is_rejected() {
        let mut data = default_data();
        data.limits.b_max = Some(f64::NAN);
        assert!(matches!(
            data.b_max(),
            Err(DataError::InvalidDataKind { ref field, .. }) if field == "limits.B_max"
        ));
    }

    #[test]
    fn wrongly_typed_value_is_invalid_data() {
        let text = r#"{"hours":{"A":"2","B":1},"labor":{"A":1,"B":1},
                       "limits":{"hours":100,"labor":80}}"#;
        let err = ProblemData::from_json(text).unwrap_err();
        let DataError::InvalidDataKind { field, reason } = &err;
        assert_eq!(field, "line 1 column 17");
        assert!(reason.starts_with("wrong shape"), "{reason}");
        assert!(reason.contains("expected f64"), "{reason}");
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let err = ProblemData::from_json("{\"hours\": {\"A\": 1,").unwrap_err();
        assert!(matches!(
            err,
            DataError::InvalidDataKind { ref reason, .. } if reason.starts_with("malformed JSON")
        ));
        assert!(err.to_string().starts_with("invalid problem data at `line 1"));
    }
}
