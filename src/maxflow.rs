use crate::network::{FlowNetwork, FlowQuantity};
use anyhow::{ensure, Result};
use std::collections::VecDeque;
use tracing::trace;

const UNREACHED: u32 = u32::MAX;

/// Maximum-flow solver using shortest augmenting layers and blocking flow.
///
/// The solver only holds scratch storage (level labels, arc cursors, BFS
/// queue), so one instance can be reused across many networks without
/// reallocating.
#[derive(Clone)]
pub struct MaxFlowSolver {
    level: Vec<u32>,
    arc_cursor: Vec<usize>,
    queue: VecDeque<usize>,
}

impl MaxFlowSolver {
    pub fn new(vertex_capacity: usize) -> Self {
        Self {
            level: Vec::with_capacity(vertex_capacity),
            arc_cursor: Vec::with_capacity(vertex_capacity),
            queue: VecDeque::with_capacity(vertex_capacity),
        }
    }

    /// Routes as much flow as the capacities admit from `source` to `sink`
    /// and returns the total. Arc costs are ignored.
    pub fn solve<F: FlowQuantity>(
        &mut self,
        network: &mut FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> Result<F> {
        ensure!(source < network.num_vertices());
        ensure!(sink < network.num_vertices());
        ensure!(source != sink);

        let mut total = F::zero();
        while self.assign_levels(network, source, sink) {
            self.arc_cursor.clear();
            self.arc_cursor.resize(network.num_vertices(), 0);
            loop {
                let pushed = self.augment(network, source, sink, F::max_value());
                if pushed == F::zero() {
                    break;
                }
                trace!("augmented {} units", pushed);
                total += pushed;
            }
        }
        Ok(total)
    }

    /// BFS over residual arcs; returns false once the sink is unreachable.
    fn assign_levels<F: FlowQuantity>(
        &mut self,
        network: &FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> bool {
        self.level.clear();
        self.level.resize(network.num_vertices(), UNREACHED);
        self.level[source] = 0;
        self.queue.clear();
        self.queue.push_back(source);

        while let Some(vertex) = self.queue.pop_front() {
            for &edge_id in network.out_edges(vertex) {
                let edge = network.edge(edge_id);
                if edge.residual() > F::zero() && self.level[edge.to()] == UNREACHED {
                    self.level[edge.to()] = self.level[vertex] + 1;
                    self.queue.push_back(edge.to());
                }
            }
        }
        self.level[sink] != UNREACHED
    }

    /// DFS along level-increasing residual arcs, advancing the per-vertex arc
    /// cursor past exhausted arcs so each is inspected once per phase.
    fn augment<F: FlowQuantity>(
        &mut self,
        network: &mut FlowNetwork<F>,
        vertex: usize,
        sink: usize,
        limit: F,
    ) -> F {
        if vertex == sink {
            return limit;
        }
        while self.arc_cursor[vertex] < network.out_edges(vertex).len() {
            let edge_id = network.out_edges(vertex)[self.arc_cursor[vertex]];
            let edge = network.edge(edge_id);
            let to = edge.to();
            let residual = edge.residual();
            if residual > F::zero() && self.level[to] == self.level[vertex] + 1 {
                let pushed = self.augment(network, to, sink, limit.min(residual));
                if pushed > F::zero() {
                    network.push(edge_id, pushed);
                    return pushed;
                }
            }
            self.arc_cursor[vertex] += 1;
        }
        F::zero()
    }
}
