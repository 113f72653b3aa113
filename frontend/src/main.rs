//! Evently frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(feature = "desktop")]
fn main() {
    use dioxus::prelude::*;
    use evently_frontend::app::App;
    use tracing_subscriber::EnvFilter;

    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("evently_client_core=debug,evently_frontend=debug")),
        )
        .init();
    tracing::info!("starting evently desktop");
    launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), target_arch = "wasm32"))]
fn main() {
    use evently_frontend::app::App;
    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // Force wasm build without reference-types so wasm-bindgen doesn't fail with
    // "failed to find intrinsics to enable clone_ref" (Rust 1.82+ default).
    // Run via shell so RUSTFLAGS is set in the same process as dx.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("sh")
        .args(["-c", &format!("export RUSTFLAGS='{}'; exec dx serve", rustflags.replace('\'', "'\"'\"'"))])
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
