use anyhow::Result;
use schemareg_client::{InMemoryRegistry, SchemaDescription, SchemaFormat, SchemaRegistryClient};
use tracing_subscriber::EnvFilter;

/// Registers an Avro schema against an in-process registry, resolves it a
/// second time from cache and fetches it back by id.
///
/// Run with `RUST_LOG=debug` to see cache hits and misses.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = SchemaRegistryClient::builder()
        .with_service(InMemoryRegistry::new())
        .build()?;

    let description = SchemaDescription::new(
        "samples",
        "com.example.Order",
        SchemaFormat::Avro,
        r#"{
            "type": "record",
            "name": "Order",
            "namespace": "com.example",
            "fields": [
                {"name": "id", "type": "long"},
                {"name": "amount", "type": "double"}
            ]
        }"#,
    );

    let registered = client.register_schema(&description).await?;
    println!(
        "registered schema id {} (version {:?})",
        registered.id, registered.version
    );

    let resolved = client.get_schema_properties(&description).await?;
    println!("resolved schema id {} from cache", resolved.id);

    let schema = client.fetch_content_by_id(&registered.id).await?;
    println!("schema content: {}", schema.definition);

    println!("cache stats: {}", serde_json::to_string(&client.cache_stats())?);
    Ok(())
}
