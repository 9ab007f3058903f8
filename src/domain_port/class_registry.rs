use crate::domain_model::{ClassDescriptor, ClassName};

/// Known content-object classes and their inheritance.
pub trait ClassRegistry: Send + Sync {
    fn resolve(&self, name: &ClassName) -> Option<ClassDescriptor>;

    /// Strict: a class is not a subclass of itself.
    fn is_subclass_of(&self, class: &ClassName, ancestor: &ClassName) -> bool {
        let mut seen = vec![class.clone()];
        let mut current = self.resolve(class).and_then(|d| d.parent);
        while let Some(parent) = current {
            if &parent == ancestor {
                return true;
            }
            if seen.contains(&parent) {
                return false;
            }
            current = self.resolve(&parent).and_then(|d| d.parent);
            seen.push(parent);
        }
        false
    }

    fn is_instance_of(&self, class: &ClassName, ancestor: &ClassName) -> bool {
        class == ancestor || self.is_subclass_of(class, ancestor)
    }
}
