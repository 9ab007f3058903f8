// registry

mod class_registry;

pub use class_registry::*;

// store

mod object_finder;

pub use object_finder::*;
