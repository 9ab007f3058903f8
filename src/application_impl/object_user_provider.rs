use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_USERNAME_FIELD: &str = "username";

/// The finder a provider queries, fixed when the provider is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderBinding {
    pub class: ClassName,
    pub field: String,
}

impl FinderBinding {
    /// Logical finder name, e.g. `getByUsername` for field `username`.
    pub fn operation_name(&self) -> String {
        let mut chars = self.field.chars();
        match chars.next() {
            Some(first) => format!("getBy{}{}", first.to_uppercase(), chars.as_str()),
            None => "getBy".to_string(),
        }
    }
}

/// Loads users from content objects of one configured class, looked up by
/// one configured field.
pub struct ObjectUserProvider {
    registry: Arc<dyn ClassRegistry>,
    finder: Arc<dyn ObjectFinder>,
    binding: FinderBinding,
}

impl ObjectUserProvider {
    pub fn new(
        registry: Arc<dyn ClassRegistry>,
        finder: Arc<dyn ObjectFinder>,
        class: impl Into<ClassName>,
        username_field: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let class = class.into();
        let username_field = username_field.into();

        if class.is_empty() {
            return Err(ConfigurationError::EmptyClassName);
        }

        let descriptor = registry
            .resolve(&class)
            .ok_or_else(|| ConfigurationError::UnknownClass(class.clone()))?;

        let base = ClassName::base();
        if !registry.is_subclass_of(&class, &base) {
            return Err(ConfigurationError::NotAnObjectClass { class, base });
        }

        if !descriptor.declares_field(&username_field) {
            return Err(ConfigurationError::UnknownField {
                class,
                field: username_field,
            });
        }

        let binding = FinderBinding {
            class,
            field: username_field,
        };
        debug!(class = %binding.class, finder = %binding.operation_name(), "user provider configured");

        Ok(ObjectUserProvider {
            registry,
            finder,
            binding,
        })
    }

    pub fn with_default_field(
        registry: Arc<dyn ClassRegistry>,
        finder: Arc<dyn ObjectFinder>,
        class: impl Into<ClassName>,
    ) -> Result<Self, ConfigurationError> {
        Self::new(registry, finder, class, DEFAULT_USERNAME_FIELD)
    }

    pub fn class(&self) -> &ClassName {
        &self.binding.class
    }

    pub fn username_field(&self) -> &str {
        &self.binding.field
    }

    pub fn binding(&self) -> &FinderBinding {
        &self.binding
    }

    fn is_user_class(&self, class: &ClassName) -> bool {
        self.registry.is_instance_of(class, &self.binding.class)
    }
}

#[async_trait::async_trait]
impl UserProvider for ObjectUserProvider {
    async fn load_user_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<ObjectRecord, UserProviderError> {
        let outcome = self
            .finder
            .find_by_field(
                &self.binding.class,
                &self.binding.field,
                identifier,
                FindLimit::One,
            )
            .await?;

        match outcome {
            FindOutcome::One(user) if self.is_user_class(user.class_name()) => Ok(user),
            other => {
                debug!(identifier, finder = %self.binding.operation_name(), outcome = ?other, "user lookup missed");
                Err(UserProviderError::UserNotFound(identifier.to_string()))
            }
        }
    }

    async fn refresh_user(
        &self,
        user: &ObjectRecord,
    ) -> Result<Option<ObjectRecord>, UserProviderError> {
        let class = user.class_name();
        if !self.is_user_class(class) || !self.registry.is_instance_of(class, &ClassName::base()) {
            warn!(%class, expected = %self.binding.class, "refusing to refresh foreign user");
            return Err(UserProviderError::UnsupportedUser(class.clone()));
        }

        let current = self.finder.find_by_id(user.id()).await?;
        Ok(current.filter(|found| self.is_user_class(found.class_name())))
    }

    fn supports_class(&self, class: &ClassName) -> bool {
        class == &self.binding.class
    }
}
