//! Class descriptors.

use std::fmt;

use serde::Serialize;

use crate::AttributeDescriptor;

/// UML stereotype of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stereotype {
    Enumeration,
    Primitive,
    /// Measurement/float wrapper such as `Voltage` or `ActivePower`.
    CimDatatype,
    Compound,
    #[default]
    Ordinary,
}

impl Stereotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stereotype::Enumeration => "enumeration",
            Stereotype::Primitive => "primitive",
            Stereotype::CimDatatype => "cim_datatype",
            Stereotype::Compound => "compound",
            Stereotype::Ordinary => "ordinary",
        }
    }

    /// Parse a loader stereotype label. Unknown labels are ordinary classes.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "enumeration" | "enum" => Stereotype::Enumeration,
            "primitive" => Stereotype::Primitive,
            "cimdatatype" | "datatype" => Stereotype::CimDatatype,
            "compound" => Stereotype::Compound,
            _ => Stereotype::Ordinary,
        }
    }
}

impl fmt::Display for Stereotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One literal of an enumeration class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumInstance {
    pub label: String,
    /// The enumeration class this literal belongs to.
    pub type_name: String,
    pub comment: Option<String>,
}

/// One UML class.
///
/// The super class is referenced by name and resolved through the
/// [`ClassMap`](crate::ClassMap); subclasses are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub super_class: Option<String>,
    pub stereotype: Stereotype,
    pub namespace: Option<String>,
    pub origin_profiles: Vec<String>,
    pub attributes: Vec<AttributeDescriptor>,
    pub instances: Vec<EnumInstance>,
    pub comment: Option<String>,
}

impl ClassDescriptor {
    /// Create an ordinary class with no attributes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_class: None,
            stereotype: Stereotype::Ordinary,
            namespace: None,
            origin_profiles: Vec::new(),
            attributes: Vec::new(),
            instances: Vec::new(),
            comment: None,
        }
    }

    pub fn with_super_class(mut self, name: impl Into<String>) -> Self {
        self.super_class = Some(name.into());
        self
    }

    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotype = stereotype;
        self
    }

    pub fn with_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin_profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// An enumeration is either stereotyped so or carries literals.
    pub fn is_enumeration(&self) -> bool {
        self.stereotype == Stereotype::Enumeration || !self.instances.is_empty()
    }

    pub fn has_attribute(&self, label: &str) -> bool {
        self.attributes.iter().any(|a| a.label == label)
    }

    /// Returns true if the class or any of its attributes is declared in
    /// one of `profiles`.
    pub fn in_any_profile(&self, profiles: &[String]) -> bool {
        self.origin_profiles.iter().any(|p| profiles.contains(p))
            || self.attributes.iter().any(|a| a.in_any_profile(profiles))
    }
}
