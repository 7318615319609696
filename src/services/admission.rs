use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::Mutex;
use tower::Service;

use crate::elevator::Elevator;
use crate::reporter::Reporter;
use crate::strategies::look::Stop;
use crate::types::request::Request;

pub type SharedElevator<R> = Arc<Mutex<Elevator<R>>>;

/// Admits each request into a shared elevator.
pub struct AdmissionService<R> {
    elevator: SharedElevator<R>,
}

impl<R> AdmissionService<R> {
    pub fn new(elevator: SharedElevator<R>) -> Self {
        AdmissionService { elevator }
    }
}

impl<R> Service<Request> for AdmissionService<R>
where
    R: Reporter + Send + 'static,
{
    type Response = ();
    type Error = anyhow::Error;
    type Future = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let elevator = Arc::clone(&self.elevator);
        Box::pin(async move {
            elevator
                .lock()
                .await
                .add_request(request.pickup_floor, request.dropoff_floor);
            Ok(())
        })
    }
}

/// Reports the admitted queues, sorts them and runs the scan.
pub async fn run_batch<R: Reporter>(elevator: &SharedElevator<R>) -> Vec<Stop> {
    let mut elevator = elevator.lock().await;
    elevator.report_queue_state();
    elevator.sort_queues();
    let stops = elevator.process_look();
    tracing::info!(
        "scan finished after {} stops, {} passengers still onboard",
        stops.len(),
        elevator.passengers().len()
    );
    stops
}
