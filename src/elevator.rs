use crate::manifest::PassengerManifest;
use crate::queue::RequestQueue;
use crate::reporter::Reporter;
use crate::types::direction::Direction;
use crate::types::request::Request;

pub const QUEUE_HEADER: [&str; 3] = ["Queue", "Pickup Floor", "Dropoff Floor"];
pub const PASSENGER_HEADER: [&str; 2] = ["Onboard Passenger", "Dropoff Floor"];

/// A single car: head position, direction, pending queues and onboard riders.
#[derive(Debug)]
pub struct Elevator<R> {
    pub(crate) head_position: i32,
    pub(crate) direction: Direction,
    pub(crate) queue: RequestQueue,
    pub(crate) passengers: PassengerManifest,
    pub(crate) reporter: R,
}

impl<R: Reporter> Elevator<R> {
    pub fn new(start_floor: i32, mut reporter: R) -> Self {
        reporter.line(&format!("Elevator initialized at floor {start_floor}"));
        Self {
            head_position: start_floor,
            direction: Direction::Idle,
            queue: RequestQueue::new(),
            passengers: PassengerManifest::new(),
            reporter,
        }
    }

    pub fn add_request(&mut self, pickup: i32, dropoff: i32) {
        let request = Request::new(pickup, dropoff);
        tracing::debug!(
            "admitting {request} against head {} ({})",
            self.head_position,
            if pickup >= self.head_position {
                "up"
            } else {
                "down"
            }
        );
        self.queue.admit(request, self.head_position);
    }

    /// Must run once after all admissions and before [`Elevator::process_look`].
    pub fn sort_queues(&mut self) {
        self.queue.sort();
    }

    /// Drops off every rider whose destination is the current head position.
    pub fn check_and_drop_off_passengers(&mut self) -> Vec<Request> {
        let floor = self.head_position;
        self.reporter
            .line(&format!("Checking for drop-offs at floor {floor}"));

        let dropped = self.passengers.drop_off_at(floor);
        for _ in &dropped {
            self.reporter
                .line(&format!("Dropped off passenger at floor {floor}."));
        }
        if !dropped.is_empty() {
            self.report_passenger_state();
        }
        dropped
    }

    pub fn report_queue_state(&mut self) {
        let rows = self.queue.rows();
        self.reporter.table(&QUEUE_HEADER, &rows);
    }

    pub fn report_passenger_state(&mut self) {
        if self.passengers.is_empty() {
            self.reporter.line("No passengers currently onboard.");
            return;
        }
        let rows = self.passengers.rows();
        self.reporter.table(&PASSENGER_HEADER, &rows);
    }
}

impl<R> Elevator<R> {
    pub fn head_position(&self) -> i32 {
        self.head_position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn passengers(&self) -> &PassengerManifest {
        &self.passengers
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
