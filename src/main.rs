#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use portfolio_site::server::{init_tracing, serve};

    init_tracing();
    if let Err(e) = serve().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
