use crate::elevator::Elevator;
use crate::reporter::Reporter;
use crate::types::direction::Direction;
use crate::types::request::Request;

/// One pickup checkpoint of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub floor: i32,
    pub direction: Direction,
    pub boarded: Request,
    pub dropped: Vec<Request>,
}

impl<R: Reporter> Elevator<R> {
    /// Runs one LOOK scan: drains the up queue, then the down queue, then goes idle.
    ///
    /// The head jumps straight to each pickup floor in sorted order. Riders are
    /// only dropped at floors the scan actually stops at, so a rider whose
    /// destination is never a pickup floor stays onboard after the scan.
    pub fn process_look(&mut self) -> Vec<Stop> {
        self.reporter
            .line("Starting to process requests using LOOK algorithm.");
        let mut stops = Vec::with_capacity(self.queue.len());

        self.direction = Direction::Up;
        while let Some(request) = self.queue.pop_up() {
            stops.push(self.service(request));
        }

        if !self.queue.down().is_empty() {
            self.direction = Direction::Down;
            while let Some(request) = self.queue.pop_down() {
                stops.push(self.service(request));
            }
        }

        self.direction = Direction::Idle;
        self.reporter
            .line("Finished processing all requests. Elevator is idle.");
        stops
    }

    fn service(&mut self, request: Request) -> Stop {
        self.head_position = request.pickup_floor;
        self.reporter.line(&format!(
            "Elevator moving {} to pick up passenger at floor {} for drop-off at floor {}.",
            self.direction, request.pickup_floor, request.dropoff_floor
        ));
        self.passengers.board(request);
        let dropped = self.check_and_drop_off_passengers();
        Stop {
            floor: self.head_position,
            direction: self.direction,
            boarded: request,
            dropped,
        }
    }
}
