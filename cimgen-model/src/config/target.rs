//! Target representations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// SQLAlchemy ORM-mapped classes
    Sqlalchemy,
    /// Pydantic data classes
    Pydantic,
    /// Plain Python dataclasses
    Dataclass,
    /// Go structs with XML wire tags
    Go,
}

impl Target {
    /// All targets, in display order.
    pub const ALL: [Target; 4] = [
        Target::Sqlalchemy,
        Target::Pydantic,
        Target::Dataclass,
        Target::Go,
    ];

    /// Returns the target identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Sqlalchemy => "sqlalchemy",
            Target::Pydantic => "pydantic",
            Target::Dataclass => "dataclass",
            Target::Go => "go",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlalchemy" | "orm" => Ok(Target::Sqlalchemy),
            "pydantic" => Ok(Target::Pydantic),
            "dataclass" | "dataclasses" => Ok(Target::Dataclass),
            "go" | "golang" => Ok(Target::Go),
            _ => Err(format!(
                "unknown target '{}', expected one of: sqlalchemy, pydantic, dataclass, go",
                s
            )),
        }
    }
}
