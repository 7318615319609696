use crate::types::request::Request;

/// Riders currently onboard. Order carries no meaning; removal swaps with the last rider.
#[derive(Debug, Default)]
pub struct PassengerManifest {
    riders: Vec<Request>,
}

impl PassengerManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&mut self, request: Request) {
        self.riders.push(request);
    }

    /// Removes every rider whose drop-off floor is `floor` and returns them.
    pub fn drop_off_at(&mut self, floor: i32) -> Vec<Request> {
        let mut dropped = Vec::new();
        let mut i = 0;
        while i < self.riders.len() {
            if self.riders[i].dropoff_floor == floor {
                // swapped-in rider lands at i, so i is checked again
                dropped.push(self.riders.swap_remove(i));
            } else {
                i += 1;
            }
        }
        dropped
    }

    pub fn contains(&self, request: &Request) -> bool {
        self.riders.contains(request)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.riders.iter()
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.riders
            .iter()
            .enumerate()
            .map(|(i, r)| vec![format!("Passenger {}", i + 1), r.dropoff_floor.to_string()])
            .collect()
    }
}
