#[tokio::main]
async fn main() {
    if let Err(err) = ut_api::run().await {
        tracing::error!(error = %err, "ut-api failed");
        std::process::exit(1);
    }
}
