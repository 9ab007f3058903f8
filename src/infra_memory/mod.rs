mod class_registry_memory;
mod object_store_memory;

pub use class_registry_memory::*;
pub use object_store_memory::*;
