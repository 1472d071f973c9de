//! The class map consumed by the engine.

use indexmap::IndexMap;

use crate::{ClassDescriptor, Stereotype};

/// Ordered mapping from class name to descriptor.
///
/// Iteration follows insertion order, which is the loader's declaration
/// order and the order every planning pass visits classes in.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    classes: IndexMap<String, ClassDescriptor>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, returning the descriptor it replaced.
    pub fn insert(&mut self, class: ClassDescriptor) -> Option<ClassDescriptor> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate classes in model order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.values()
    }

    pub fn stereotype(&self, name: &str) -> Option<Stereotype> {
        self.get(name).map(|c| c.stereotype)
    }

    pub fn is_enumeration(&self, name: &str) -> bool {
        self.get(name).is_some_and(ClassDescriptor::is_enumeration)
    }

    pub fn is_cim_datatype(&self, name: &str) -> bool {
        self.stereotype(name) == Some(Stereotype::CimDatatype)
    }

    /// Direct subclasses of `name`, computed by reverse lookup.
    pub fn sub_classes(&self, name: &str) -> Vec<&ClassDescriptor> {
        self.iter()
            .filter(|c| c.super_class.as_deref() == Some(name))
            .collect()
    }

    pub fn has_sub_classes(&self, name: &str) -> bool {
        self.iter().any(|c| c.super_class.as_deref() == Some(name))
    }

    /// Super class chain of `name`, nearest first.
    ///
    /// Stops at the first super class missing from the map and never
    /// revisits a class, so a cyclic chain terminates.
    pub fn ancestors(&self, name: &str) -> Vec<&str> {
        let mut chain: Vec<&str> = Vec::new();
        let mut current = self.get(name);
        while let Some(class) = current {
            let Some(parent) = class.super_class.as_deref() else {
                break;
            };
            if parent == name || chain.contains(&parent) {
                break;
            }
            let Some(parent_class) = self.get(parent) else {
                break;
            };
            chain.push(parent_class.name.as_str());
            current = Some(parent_class);
        }
        chain
    }
}

impl FromIterator<ClassDescriptor> for ClassMap {
    fn from_iter<T: IntoIterator<Item = ClassDescriptor>>(iter: T) -> Self {
        let mut map = ClassMap::new();
        for class in iter {
            map.insert(class);
        }
        map
    }
}
