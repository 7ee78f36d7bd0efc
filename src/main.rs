use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gympoint_lib::run().await.context("gympoint server failed")
}
