mod object_user_provider;

pub use object_user_provider::*;
