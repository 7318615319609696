use std::collections::VecDeque;

use crate::types::request::Request;

/// Pending requests split by the head position at admission time.
#[derive(Debug, Default)]
pub struct RequestQueue {
    up_queue: VecDeque<Request>,
    down_queue: VecDeque<Request>,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the up queue when `pickup >= head`, otherwise to the down queue.
    pub fn admit(&mut self, request: Request, head: i32) {
        if request.pickup_floor >= head {
            self.up_queue.push_back(request);
        } else {
            self.down_queue.push_back(request);
        }
    }

    /// Up queue ascending, down queue descending, both by pickup floor.
    /// Both sorts are stable.
    pub fn sort(&mut self) {
        self.up_queue
            .make_contiguous()
            .sort_by_key(|r| r.pickup_floor);
        self.down_queue
            .make_contiguous()
            .sort_by(|a, b| b.pickup_floor.cmp(&a.pickup_floor));
    }

    pub fn pop_up(&mut self) -> Option<Request> {
        self.up_queue.pop_front()
    }

    pub fn pop_down(&mut self) -> Option<Request> {
        self.down_queue.pop_front()
    }

    pub fn up(&self) -> &VecDeque<Request> {
        &self.up_queue
    }

    pub fn down(&self) -> &VecDeque<Request> {
        &self.down_queue
    }

    pub fn len(&self) -> usize {
        self.up_queue.len() + self.down_queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up_queue.is_empty() && self.down_queue.is_empty()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        let up = self.up_queue.iter().map(|r| ("UP", r));
        let down = self.down_queue.iter().map(|r| ("DOWN", r));
        up.chain(down)
            .map(|(label, r)| {
                vec![
                    label.to_string(),
                    r.pickup_floor.to_string(),
                    r.dropoff_floor.to_string(),
                ]
            })
            .collect()
    }
}
