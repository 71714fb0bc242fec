#[tokio::main]
async fn main() -> anyhow::Result<()> {
    study_arcade_backend::run().await
}
