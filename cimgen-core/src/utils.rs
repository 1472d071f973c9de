//! Shared string helpers for naming generated artifacts.

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Derive the SQL table name for a CIM class.
///
/// Every capital letter after the first starts a new word, so acronyms are
/// split letter by letter: `ACLineSegment` becomes `a_c_line_segment`.
/// A name that starts lowercase keeps its first letter.
pub fn to_table_name(class_name: &str) -> String {
    to_snake_case(class_name)
}

/// Lowercase the first character (e.g., "BaseVoltage" -> "baseVoltage")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Uppercase the first character (e.g., "baseVoltage" -> "BaseVoltage")
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Strip a URI down to its fragment (e.g., "http://iec.ch/TC57/CIM100#Float" -> "Float").
///
/// Strings without a `#` are returned unchanged.
pub fn strip_fragment(uri: &str) -> &str {
    uri.rsplit_once('#').map_or(uri, |(_, fragment)| fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_table_name() {
        assert_eq!(to_table_name("Substation"), "substation");
        assert_eq!(to_table_name("PowerTransformerEnd"), "power_transformer_end");
        assert_eq!(to_table_name("ACLineSegment"), "a_c_line_segment");
    }

    #[test]
    fn test_to_table_name_keeps_lowercase_start() {
        assert_eq!(to_table_name("substation"), "substation");
        assert_eq!(to_table_name("baseVoltage"), "base_voltage");
    }

    #[test]
    fn test_first_char_helpers() {
        assert_eq!(lower_first("BaseVoltage"), "baseVoltage");
        assert_eq!(upper_first("baseVoltage"), "BaseVoltage");
        assert_eq!(lower_first("mRID"), "mRID");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_strip_fragment() {
        assert_eq!(strip_fragment("#Float"), "Float");
        assert_eq!(strip_fragment("http://iec.ch/TC57/CIM100#Voltage"), "Voltage");
        assert_eq!(strip_fragment("Substation"), "Substation");
    }
}
