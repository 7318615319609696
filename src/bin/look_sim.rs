use anyhow::Context;
use look_elevator::config::{ReporterKind, SimConfig};
use look_elevator::elevator::Elevator;
use look_elevator::logging;
use look_elevator::reporter::{ConsoleReporter, Reporter, TracingReporter};
use look_elevator::services::admission::{AdmissionService, run_batch};
use look_elevator::services::request_line::RequestLineLayer;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tower::{Service, ServiceBuilder, ServiceExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = SimConfig::from_env()?;
    tracing::info!("starting simulation: {config:?}");

    match config.reporter {
        ReporterKind::Console => run(&config, ConsoleReporter::stdout()).await,
        ReporterKind::Tracing => run(&config, TracingReporter).await,
    }
}

async fn run<R>(config: &SimConfig, reporter: R) -> anyhow::Result<()>
where
    R: Reporter + Send + 'static,
{
    let elevator = Arc::new(Mutex::new(Elevator::new(config.start_floor, reporter)));
    let mut svc = ServiceBuilder::new()
        .layer(RequestLineLayer)
        .service(AdmissionService::new(Arc::clone(&elevator)));

    match &config.requests {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open request file {}", path.display()))?;
            let mut lines = BufReader::new(file).lines();
            while let Some(line) = lines.next_line().await? {
                svc.ready().await?;
                svc.call(line).await?;
            }
        }
        None => {
            for line in SimConfig::demo_lines() {
                svc.ready().await?;
                svc.call(line).await?;
            }
        }
    }

    run_batch(&elevator).await;
    Ok(())
}
