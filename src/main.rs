#[tokio::main]
async fn main() {
    if let Err(e) = arena_sim::run_with_config().await {
        tracing::error!(error = %e, "arena exited with error");
        std::process::exit(1);
    }
}
