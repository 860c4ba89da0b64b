//! Process entry point: run the default pipeline once.

use libriprep::pipeline::PipelineBuilder;
use libriprep::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let pipeline = PipelineBuilder::new().build();
    pipeline.run().await?;

    Ok(())
}
