//! UML multiplicity tokens (`M:0..1`, `M:1..n`, ...).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Upper bound of a multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Upper {
    One,
    Many,
}

/// A parsed multiplicity. `min` is always 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Multiplicity {
    pub min: u8,
    pub max: Upper,
}

impl Multiplicity {
    /// Exactly one (`M:1`, `M:1..1`).
    pub const ONE: Self = Self {
        min: 1,
        max: Upper::One,
    };
    /// Zero or one (`M:0..1`).
    pub const OPTIONAL: Self = Self {
        min: 0,
        max: Upper::One,
    };
    /// Zero or more (`M:0..n`).
    pub const MANY: Self = Self {
        min: 0,
        max: Upper::Many,
    };
    /// One or more (`M:1..n`).
    pub const AT_LEAST_ONE: Self = Self {
        min: 1,
        max: Upper::Many,
    };

    pub fn is_many(&self) -> bool {
        self.max == Upper::Many
    }

    pub fn is_optional(&self) -> bool {
        self.min == 0
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Upper::One => write!(f, "{}..1", self.min),
            Upper::Many => write!(f, "{}..n", self.min),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultiplicityError {
    #[error("multiplicity is empty")]
    Empty,
    #[error("malformed multiplicity '{0}'")]
    Malformed(String),
}

/// Parse a multiplicity token.
///
/// `M:1..1` and `M:1` are (1,1), `M:0..1` is (0,1). Any other token
/// containing `M:0..` or `M:1..` has an unbounded maximum, so `M:0..2`
/// is (0,n). Remaining `M:<lo>..<hi>` forms with `lo >= 2` are (1,n).
pub fn parse_multiplicity(token: &str) -> Result<Multiplicity, MultiplicityError> {
    let token = token.trim();
    match token {
        "" => return Err(MultiplicityError::Empty),
        "M:1..1" | "M:1" => return Ok(Multiplicity::ONE),
        "M:0..1" => return Ok(Multiplicity::OPTIONAL),
        _ => {}
    }
    if token.contains("M:0..") {
        return Ok(Multiplicity::MANY);
    }
    if token.contains("M:1..") {
        return Ok(Multiplicity::AT_LEAST_ONE);
    }

    let malformed = || MultiplicityError::Malformed(token.to_string());
    let bounds = token.strip_prefix("M:").ok_or_else(malformed)?;
    let is_unbounded = |s: &str| matches!(s, "n" | "N" | "*");

    match bounds.split_once("..") {
        Some((lower, upper)) => {
            let lower: u32 = lower.parse().map_err(|_| malformed())?;
            if !is_unbounded(upper) {
                let upper: u32 = upper.parse().map_err(|_| malformed())?;
                if upper < lower {
                    return Err(malformed());
                }
            }
            // lower is at least 2 here
            Ok(Multiplicity::AT_LEAST_ONE)
        }
        None if is_unbounded(bounds) => Ok(Multiplicity::MANY),
        None => match bounds.parse::<u32>() {
            Ok(n) if n >= 2 => Ok(Multiplicity::AT_LEAST_ONE),
            _ => Err(malformed()),
        },
    }
}

/// A named correction for a known upstream schema defect.
#[derive(Debug, Clone, Copy)]
pub struct MultiplicityOverride {
    /// Attribute label the correction applies to.
    pub label: &'static str,
    /// Exact token that is corrected.
    pub token: &'static str,
    /// Multiplicity used instead.
    pub multiplicity: Multiplicity,
}

/// Known schema defects, keyed by attribute label.
///
/// `PowerSystemResources` back-references are declared `M:1` in the CIM
/// RDF schema although they hold many resources.
pub const MULTIPLICITY_OVERRIDES: &[MultiplicityOverride] = &[MultiplicityOverride {
    label: "PowerSystemResources",
    token: "M:1",
    multiplicity: Multiplicity::AT_LEAST_ONE,
}];

/// Multiplicity of one association end as the engine sees it.
///
/// Applies [`MULTIPLICITY_OVERRIDES`] first. With `plural_role_heuristic`,
/// an `M:1` end whose label ends in `s` is read as (1,n). An absent token
/// is the same as an empty one.
pub fn effective_multiplicity(
    label: &str,
    token: Option<&str>,
    plural_role_heuristic: bool,
) -> Result<Multiplicity, MultiplicityError> {
    let token = token.map(str::trim).unwrap_or_default();

    if let Some(correction) = MULTIPLICITY_OVERRIDES
        .iter()
        .find(|o| o.label == label && o.token == token)
    {
        return Ok(correction.multiplicity);
    }

    if plural_role_heuristic && is_plural_role(label, Some(token)) {
        return Ok(Multiplicity::AT_LEAST_ONE);
    }

    parse_multiplicity(token)
}

/// An `M:1` end whose label ends in `s`.
pub fn is_plural_role(label: &str, token: Option<&str>) -> bool {
    token.map(str::trim) == Some("M:1") && label.ends_with('s')
}
