use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use std::sync::Arc;

/// A user provider wired from settings.
pub struct Directory {
    pub provider: Arc<dyn UserProvider>,
}

impl Directory {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let registry: Arc<dyn ClassRegistry> = Arc::new(InMemoryClassRegistry::from_descriptors(
            settings.classes.iter().cloned(),
        ));

        let finder: Arc<dyn ObjectFinder> = match settings.store.backend.as_str() {
            "memory" => match settings.store.fixtures.as_deref() {
                Some(path) => Arc::new(InMemoryObjectStore::load_fixtures(path)?),
                None => Arc::new(InMemoryObjectStore::new()),
            },
            "mysql" => {
                let dsn = settings
                    .store
                    .dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("store.dsn is required for the mysql backend"))?;
                let store = MySqlObjectStore::connect(dsn).await?;
                store.ensure_schema().await?;
                Arc::new(store)
            }
            other => return Err(anyhow!("Unknown store backend: {}", other)),
        };
        info!(backend = %settings.store.backend, classes = settings.classes.len(), "object store ready");

        Self::with_ports(settings, registry, finder)
    }

    /// Builds the provider over already constructed ports.
    pub fn with_ports(
        settings: &Settings,
        registry: Arc<dyn ClassRegistry>,
        finder: Arc<dyn ObjectFinder>,
    ) -> anyhow::Result<Self> {
        let provider = ObjectUserProvider::new(
            registry,
            finder,
            settings.provider.class.as_str(),
            settings.provider.username_field.as_str(),
        )?;

        Ok(Directory {
            provider: Arc::new(provider),
        })
    }
}
