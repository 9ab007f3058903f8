mod class;
mod object;

pub use class::*;
pub use object::*;
