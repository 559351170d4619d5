use std::collections::{HashSet, VecDeque};

use crate::solver::instance::VariableId;

/// FIFO queue of directed arcs `(xi, xj)` awaiting revision, with
/// membership tracking so an arc is never queued twice at once.
///
/// AC-3 is confluent, so the processing discipline only affects performance;
/// a plain FIFO keeps revision order predictable.
pub(crate) struct WorkList {
    queue: VecDeque<(VariableId, VariableId)>,
    members: HashSet<(VariableId, VariableId)>,
}

impl WorkList {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: HashSet::new(),
        }
    }

    pub(crate) fn push_back(&mut self, xi: VariableId, xj: VariableId) {
        if self.members.insert((xi, xj)) {
            self.queue.push_back((xi, xj));
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<(VariableId, VariableId)> {
        let arc = self.queue.pop_front()?;
        self.members.remove(&arc);
        Some(arc)
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
