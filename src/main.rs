//! Lakshya Danceverse
//!
//! One binary for both halves: with `server` it renders and hydrates the app
//! and hosts the coach server functions; with `web` it is the WASM client.

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    dioxus::launch(lakshya_danceverse::app::App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lakshya_danceverse=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lakshya Danceverse");
}
