//! Naming conventions for the target representations.

use cimgen_core::{lower_first, upper_first};

/// Target-specific field naming.
///
/// Defines how an attribute label becomes a field name and how reserved
/// words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an attribute label into a field name (first-character rule)
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the target language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "from" -> "from_" in Python)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform a label and append `suffix`, then make it safe.
    pub fn field_name(&self, label: &str, suffix: &str) -> String {
        let transformed = (self.field_to_name)(label);
        self.safe_name(&format!("{}{}", transformed, suffix))
    }
}

fn keep(s: &str) -> String {
    s.to_string()
}

fn escape_with_trailing_underscore(name: &str) -> String {
    format!("{}_", name)
}

fn escape_with_underscore(name: &str) -> String {
    format!("_{}", name)
}

const PYTHON_RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Python naming that keeps the label as declared.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    field_to_name: keep,
    reserved_words: PYTHON_RESERVED,
    escape_reserved: escape_with_trailing_underscore,
};

/// Python naming that lowercases the first character (ORM columns).
pub const PYTHON_LOWER_NAMING: NamingConvention = NamingConvention {
    field_to_name: lower_first,
    reserved_words: PYTHON_RESERVED,
    escape_reserved: escape_with_trailing_underscore,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    field_to_name: upper_first, // exported fields
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_naming_keeps_label() {
        assert_eq!(PYTHON_NAMING.field_name("BaseVoltage", ""), "BaseVoltage");
        assert_eq!(PYTHON_NAMING.field_name("mRID", ""), "mRID");
    }

    #[test]
    fn test_python_lower_naming() {
        assert_eq!(PYTHON_LOWER_NAMING.field_name("BaseVoltage", ""), "baseVoltage");
        assert_eq!(PYTHON_LOWER_NAMING.field_name("Terminals", ""), "terminals");
    }

    #[test]
    fn test_python_reserved_words() {
        assert!(PYTHON_NAMING.is_reserved("from"));
        assert!(!PYTHON_NAMING.is_reserved("From"));
        assert_eq!(PYTHON_LOWER_NAMING.field_name("From", ""), "from_");
    }

    #[test]
    fn test_go_naming_with_suffix() {
        assert_eq!(GO_NAMING.field_name("baseVoltage", "Id"), "BaseVoltageId");
        assert_eq!(GO_NAMING.field_name("Terminals", "Ids"), "TerminalsIds");
        assert_eq!(GO_NAMING.field_name("mRID", ""), "MRID");
    }
}
