mod user_provider;

pub use user_provider::*;
