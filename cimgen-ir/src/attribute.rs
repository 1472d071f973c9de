//! Attribute and association end descriptors.

use serde::Serialize;

/// What an attribute points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttributeKind {
    /// A primitive or CIM datatype (e.g. `Float`, `Voltage`).
    Datatype { name: String },
    /// A reference to another class.
    Reference { range: String },
    /// Neither datatype nor range was declared, but a multiplicity was.
    UntypedReference,
}

/// The opposite end of an association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InverseEnd {
    /// Role name written as `Class.label`.
    pub role: String,
    /// Raw multiplicity token of the opposite end.
    pub multiplicity: Option<String>,
}

impl InverseEnd {
    pub fn new(role: impl Into<String>, multiplicity: Option<String>) -> Self {
        Self {
            role: role.into(),
            multiplicity,
        }
    }

    /// The label part of the role (`Substation.Bays` -> `Bays`).
    pub fn label(&self) -> &str {
        self.role
            .rsplit_once('.')
            .map_or(self.role.as_str(), |(_, label)| label)
    }

    /// The class part of the role, if qualified.
    pub fn class(&self) -> Option<&str> {
        self.role.rsplit_once('.').map(|(class, _)| class)
    }
}

/// One UML attribute or association end, owned by its domain class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    pub label: String,
    pub domain: String,
    pub namespace: Option<String>,
    pub kind: AttributeKind,
    /// Raw multiplicity token (e.g. `M:0..1`).
    pub multiplicity: Option<String>,
    pub inverse: Option<InverseEnd>,
    /// Literal default value.
    pub is_fixed: Option<String>,
    pub origin_profiles: Vec<String>,
    pub comment: Option<String>,
}

impl AttributeDescriptor {
    /// Create a descriptor with no multiplicity, inverse or profiles.
    pub fn new(domain: impl Into<String>, label: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            label: label.into(),
            domain: domain.into(),
            namespace: None,
            kind,
            multiplicity: None,
            inverse: None,
            is_fixed: None,
            origin_profiles: Vec::new(),
            comment: None,
        }
    }

    /// Set the multiplicity token.
    pub fn with_multiplicity(mut self, token: impl Into<String>) -> Self {
        self.multiplicity = Some(token.into());
        self
    }

    /// Set the inverse end.
    pub fn with_inverse(
        mut self,
        role: impl Into<String>,
        multiplicity: impl Into<String>,
    ) -> Self {
        self.inverse = Some(InverseEnd::new(role, Some(multiplicity.into())));
        self
    }

    /// Set the origin profiles.
    pub fn with_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origin_profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the literal default.
    pub fn with_fixed(mut self, value: impl Into<String>) -> Self {
        self.is_fixed = Some(value.into());
        self
    }

    /// The wire role name, `Domain.label`.
    pub fn about(&self) -> String {
        format!("{}.{}", self.domain, self.label)
    }

    /// Returns true for the universal identity attribute.
    pub fn is_identity(&self) -> bool {
        self.label == "mRID"
    }

    /// The referenced class, if this is a class reference.
    pub fn range(&self) -> Option<&str> {
        match &self.kind {
            AttributeKind::Reference { range } => Some(range),
            _ => None,
        }
    }

    /// The datatype name, if this is a datatype attribute.
    pub fn datatype(&self) -> Option<&str> {
        match &self.kind {
            AttributeKind::Datatype { name } => Some(name),
            _ => None,
        }
    }

    /// Returns true if any origin profile is in `profiles`.
    pub fn in_any_profile(&self, profiles: &[String]) -> bool {
        self.origin_profiles.iter().any(|p| profiles.contains(p))
    }
}
