use anyhow::Context;
use clap::Parser;
use kora_catalog::adapters::http;
use kora_catalog::core::DocumentStore;
use kora_catalog::utils::{logger, validation::Validate};
use kora_catalog::{
    CatalogService, CliArgs, Command, JsonFileStore, MemoryStore, SeedFixture, ServiceConfig,
    StoreLocation,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut config = ServiceConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    args.apply_to(&mut config);

    logger::init_logger(config.logging.verbose, config.logging.json);
    tracing::info!("Starting kora-catalog");
    tracing::debug!("Service config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fixture = match &config.catalog.seed_fixture {
        Some(path) => SeedFixture::from_file(path),
        None => SeedFixture::embedded(),
    }
    .context("seed fixture is invalid")?;
    tracing::info!(
        "Loaded seed fixture version {} with {} records",
        fixture.version(),
        fixture.len()
    );

    let command = args.command();
    if let Command::CheckFixture = command {
        println!("✅ Fixture version {}: {} records", fixture.version(), fixture.len());
        for (id, property_type) in fixture.unknown_types() {
            println!("⚠️  {} uses non-standard type '{}'", id, property_type);
        }
        return Ok(());
    }

    match config.store_location()? {
        StoreLocation::Memory => {
            if let Command::Seed = command {
                tracing::warn!("Seeding an in-memory store has no effect after exit");
            }
            run(MemoryStore::new(), fixture, command, &config).await
        }
        StoreLocation::File(base_path) => {
            let store =
                JsonFileStore::new(base_path, &config.store.database, &config.store.collection);
            tracing::info!("Using collection file {}", store.path().display());
            run(store, fixture, command, &config).await
        }
    }
}

async fn run<S: DocumentStore + 'static>(
    store: S,
    fixture: SeedFixture,
    command: Command,
    config: &ServiceConfig,
) -> anyhow::Result<()> {
    let catalog = Arc::new(CatalogService::new(store, fixture));

    match command {
        Command::Seed => {
            let count = catalog.reseed().await.context("reseed failed")?;
            println!("✅ Database seeded successfully with {} properties", count);
            Ok(())
        }
        Command::Serve { seed_on_start } => {
            if seed_on_start {
                catalog.reseed().await.context("initial reseed failed")?;
            }
            http::setup_and_serve(catalog, &config.bind_address(), shutdown_signal()).await
        }
        Command::CheckFixture => Ok(()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received, stopping server");
}
