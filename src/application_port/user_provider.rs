use crate::domain_model::{ClassName, ObjectRecord};

/// Rejections raised while wiring a provider. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Object class name is empty")]
    EmptyClassName,
    #[error("User class {0} does not exist")]
    UnknownClass(ClassName),
    #[error("User class {class} must be a subclass of {base}")]
    NotAnObjectClass { class: ClassName, base: ClassName },
    #[error("User class {class} has no queryable field {field}")]
    UnknownField { class: ClassName, field: String },
}

#[derive(Debug, thiserror::Error)]
pub enum UserProviderError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("User {0} was not found")]
    UserNotFound(String),
    #[error("unsupported user of class {0}")]
    UnsupportedUser(ClassName),
    #[error("store error: {0}")]
    Store(String),
}

/// Contract the authentication layer uses to resolve and reload users.
#[async_trait::async_trait]
pub trait UserProvider: Send + Sync {
    /// Load the user whose username equals `identifier`.
    async fn load_user_by_identifier(&self, identifier: &str)
    -> Result<ObjectRecord, UserProviderError>;

    /// Reload a previously loaded user. A user that has since disappeared
    /// yields `Ok(None)`.
    async fn refresh_user(
        &self,
        user: &ObjectRecord,
    ) -> Result<Option<ObjectRecord>, UserProviderError>;

    fn supports_class(&self, class: &ClassName) -> bool;
}
