use crate::domain_model::*;
use crate::domain_port::ClassRegistry;
use dashmap::DashMap;

/// Class registry held in memory. Always knows the base object class.
pub struct InMemoryClassRegistry {
    classes: DashMap<ClassName, ClassDescriptor>,
}

impl InMemoryClassRegistry {
    pub fn new() -> Self {
        let classes = DashMap::new();
        classes.insert(ClassName::base(), ClassDescriptor::new(BASE_OBJECT_CLASS, None));
        InMemoryClassRegistry { classes }
    }

    pub fn from_descriptors(descriptors: impl IntoIterator<Item = ClassDescriptor>) -> Self {
        let registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor);
        }
        registry
    }

    /// Adds or replaces a class.
    pub fn register(&self, descriptor: ClassDescriptor) {
        self.classes.insert(descriptor.name.clone(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for InMemoryClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry for InMemoryClassRegistry {
    fn resolve(&self, name: &ClassName) -> Option<ClassDescriptor> {
        self.classes.get(name).map(|entry| entry.value().clone())
    }
}
