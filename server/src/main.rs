mod args;
mod error;
mod logger;
mod resources;
mod runtime;

fn main() -> std::process::ExitCode {
    let (verbosity, port, list) = args::parse().decompose();

    if let Err(err) = logger::setup(verbosity) {
        eprintln!("{err}");
        return std::process::ExitCode::FAILURE;
    }

    tracing::info!(port = port, list = list, "Configuration loaded");

    let router = resources::build();

    if list {
        return match print_listing(&router) {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(error) => {
                tracing::error!(%error, "Failed to list routes");
                std::process::ExitCode::FAILURE
            }
        };
    }

    let runtime = match runtime::runtime() {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "Failed to build the async runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(error) = runtime.block_on(async_main(port, router)) {
        tracing::error!(%error, "Server stopped");
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}

fn print_listing(router: &routify::Router<routify::binding::Handler>) -> error::Result {
    let mut listing = routify::Listing::new();
    if let Err(never) = router.routify(&mut listing) {
        match never {}
    }

    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}

async fn async_main(
    port: u16,
    router: routify::Router<routify::binding::Handler>,
) -> error::Result {
    let mut server = routify::binding::Axum::new();
    router.routify(&mut server)?;
    let app = server.into_router();

    let address = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%address, "Serving");

    axum::Server::try_bind(&address)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for the shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
