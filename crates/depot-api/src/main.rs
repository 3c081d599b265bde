use depot_api::setup;
use depot_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load .env if present before reading configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // Initialize the application (services, routes)
    let (_state, router) = setup::initialize_app(config.clone())?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
