mod logging;

#[cfg(any(target_arch = "wasm32", test))]
mod content;
#[cfg(any(target_arch = "wasm32", test))]
mod navigation;
#[cfg(any(target_arch = "wasm32", test))]
mod scroll;
#[cfg(any(target_arch = "wasm32", test))]
mod sections;
#[cfg(any(target_arch = "wasm32", test))]
mod stats;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
