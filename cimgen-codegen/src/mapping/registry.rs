//! First-writer-wins registry of one-to-one owners and join tables.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Identifies an association end as `(domain, range, role)`.
///
/// The role keeps two distinct one-to-one associations between the same
/// pair of classes apart. The reverse of `A.x -> B` with inverse `B.y`
/// is `(B, A, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AssociationKey {
    pub domain: String,
    pub range: String,
    pub role: String,
}

impl AssociationKey {
    pub fn new(
        domain: impl Into<String>,
        range: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            range: range.into(),
            role: role.into(),
        }
    }
}

impl fmt::Display for AssociationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} -> {}", self.domain, self.role, self.range)
    }
}

/// Identifies a join table by its ordered class pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TableKey {
    pub domain: String,
    pub range: String,
}

impl TableKey {
    pub fn new(domain: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            range: range.into(),
        }
    }

    /// The same pair seen from the other end.
    pub fn reversed(&self) -> Self {
        Self {
            domain: self.range.clone(),
            range: self.domain.clone(),
        }
    }

    /// Canonical pair name (e.g., `TerminalToConnectivityNode`).
    pub fn canonical_name(&self) -> String {
        format!("{}To{}", self.domain, self.range)
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// The attribute that claimed a registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AttributeRef {
    pub class: String,
    pub label: String,
}

impl AttributeRef {
    pub fn new(class: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for AttributeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class, self.label)
    }
}

/// Registry scoped to one planning pass.
///
/// Entries are never overwritten: registering a key that is already
/// present is a no-op that returns `false`. Iteration follows
/// registration order.
#[derive(Debug, Default)]
pub struct AssociationRegistry {
    one_to_one: IndexMap<AssociationKey, AttributeRef>,
    join_tables: IndexMap<TableKey, AttributeRef>,
}

impl AssociationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_association(&self, key: &AssociationKey) -> bool {
        self.one_to_one.contains_key(key)
    }

    /// The attribute that owns `key`, if registered.
    pub fn association_owner(&self, key: &AssociationKey) -> Option<&AttributeRef> {
        self.one_to_one.get(key)
    }

    /// Register `owner` for `key`. Returns whether the key was new.
    pub fn register_association(&mut self, key: AssociationKey, owner: AttributeRef) -> bool {
        if self.one_to_one.contains_key(&key) {
            return false;
        }
        self.one_to_one.insert(key, owner);
        true
    }

    pub fn contains_table(&self, key: &TableKey) -> bool {
        self.join_tables.contains_key(key)
    }

    /// Register a join table declared by `declared_by`. Returns whether
    /// the key was new.
    pub fn register_table(&mut self, key: TableKey, declared_by: AttributeRef) -> bool {
        if self.join_tables.contains_key(&key) {
            return false;
        }
        self.join_tables.insert(key, declared_by);
        true
    }

    /// The registered key for a class pair in either direction.
    pub fn find_table(&self, key: &TableKey) -> Option<&TableKey> {
        self.join_tables
            .get_key_value(key)
            .or_else(|| self.join_tables.get_key_value(&key.reversed()))
            .map(|(k, _)| k)
    }

    pub fn associations(&self) -> impl Iterator<Item = (&AssociationKey, &AttributeRef)> {
        self.one_to_one.iter()
    }

    pub fn join_tables(&self) -> impl Iterator<Item = (&TableKey, &AttributeRef)> {
        self.join_tables.iter()
    }

    pub fn association_count(&self) -> usize {
        self.one_to_one.len()
    }

    pub fn table_count(&self) -> usize {
        self.join_tables.len()
    }
}
