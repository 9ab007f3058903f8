use object_user_provider::application_impl::ObjectUserProvider;
use object_user_provider::application_port::*;
use object_user_provider::domain_model::*;
use object_user_provider::infra_memory::*;
use object_user_provider::logger::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _logger = Logger::new_bootstrap();

    let registry = Arc::new(InMemoryClassRegistry::from_descriptors([
        ClassDescriptor::new("Demo\\Member", Some(BASE_OBJECT_CLASS))
            .with_fields(["username", "email"]),
        ClassDescriptor::new("Demo\\Invoice", None),
    ]));
    let store = Arc::new(InMemoryObjectStore::from_records([
        ObjectRecord::new(1, "Demo\\Member")
            .with_field("username", "carol")
            .with_field("email", "carol@example.com"),
    ]));

    // A class outside the object hierarchy is refused up front
    let refused =
        ObjectUserProvider::with_default_field(registry.clone(), store.clone(), "Demo\\Invoice");
    info!("invoice provider: {:?}", refused.err());

    let provider =
        ObjectUserProvider::with_default_field(registry.clone(), store.clone(), "Demo\\Member")?;

    let carol = provider.load_user_by_identifier("carol").await?;
    info!(?carol, "loaded");

    let missing = provider.load_user_by_identifier("dave").await;
    info!("dave: {:?}", missing.err());

    store.insert(carol.clone().with_field("email", "carol@new.example.com"));
    let refreshed = provider.refresh_user(&carol).await?;
    info!(?refreshed, "refreshed");

    store.remove(carol.id());
    info!("after delete: {:?}", provider.refresh_user(&carol).await?);

    info!(
        member = provider.supports_class(&"Demo\\Member".into()),
        invoice = provider.supports_class(&"Demo\\Invoice".into()),
        "supports_class"
    );

    Ok(())
}
