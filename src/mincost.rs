use crate::network::{FlowNetwork, FlowQuantity};
use anyhow::{ensure, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::trace;

const NO_PARENT: u32 = u32::MAX;

/// Flow value and total routing cost reported by [`MinCostSolver::solve`].
///
/// Both fields are meaningful even when the flow falls short of a caller's
/// demand; feasibility is the caller's judgement, not an error here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlowSummary<F: FlowQuantity> {
    pub flow: F,
    pub cost: F,
}

/// Min-cost max-flow via successive shortest augmenting paths.
///
/// Shortest paths are computed with Dijkstra over costs reduced by Johnson
/// potentials, which keeps every inspected arc weight non-negative as long as
/// all *forward* costs are non-negative. That restriction is deliberate:
/// constructions with profit-like weights subtract them from a known upper
/// bound instead of using negative costs, and undo the transform when
/// reporting (`flow * bound - cost`). A general negative-cost cancellation
/// scheme would be asymptotically slower on the instances this crate targets.
#[derive(Clone)]
pub struct MinCostSolver<F: FlowQuantity> {
    dist: Vec<F>,
    potential: Vec<F>,
    parent_edge: Vec<u32>,
    heap: BinaryHeap<Reverse<(F, u32)>>,
}

impl<F: FlowQuantity> MinCostSolver<F> {
    pub fn new(vertex_capacity: usize) -> Self {
        Self {
            dist: Vec::with_capacity(vertex_capacity),
            potential: Vec::with_capacity(vertex_capacity),
            parent_edge: Vec::with_capacity(vertex_capacity),
            heap: BinaryHeap::with_capacity(vertex_capacity),
        }
    }

    /// Computes a maximum flow of minimum total cost from `source` to `sink`.
    pub fn solve(
        &mut self,
        network: &mut FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> Result<FlowSummary<F>> {
        ensure!(source < network.num_vertices());
        ensure!(sink < network.num_vertices());
        ensure!(source != sink);
        ensure!(
            network.forward_edges().all(|view| view.cost >= F::zero()),
            "forward arc costs must be non-negative; subtract from an upper bound instead"
        );

        let num_vertices = network.num_vertices();
        self.potential.clear();
        self.potential.resize(num_vertices, F::zero());

        let mut summary = FlowSummary {
            flow: F::zero(),
            cost: F::zero(),
        };
        while self.shortest_path_tree(network, source, sink) {
            // bottleneck along the parent trail
            let mut delta = F::max_value();
            let mut vertex = sink;
            while vertex != source {
                let edge_id = self.parent_edge[vertex];
                delta = delta.min(network.edge(edge_id).residual());
                vertex = network.edge_tail(edge_id);
            }

            let mut vertex = sink;
            while vertex != source {
                let edge_id = self.parent_edge[vertex];
                summary.cost += delta * network.edge(edge_id).cost();
                network.push(edge_id, delta);
                vertex = network.edge_tail(edge_id);
            }
            summary.flow += delta;
            trace!("augmented {} units, total {}", delta, summary.flow);

            // fold distances into the potentials; vertices the search no
            // longer reaches stay out of every future residual path
            for vertex in 0..num_vertices {
                if self.dist[vertex] != F::max_value() {
                    self.potential[vertex] += self.dist[vertex];
                }
            }
        }
        Ok(summary)
    }

    /// Dijkstra over reduced costs; returns false once the sink is
    /// unreachable in the residual graph.
    fn shortest_path_tree(
        &mut self,
        network: &FlowNetwork<F>,
        source: usize,
        sink: usize,
    ) -> bool {
        let num_vertices = network.num_vertices();
        self.dist.clear();
        self.dist.resize(num_vertices, F::max_value());
        self.parent_edge.clear();
        self.parent_edge.resize(num_vertices, NO_PARENT);
        self.heap.clear();

        self.dist[source] = F::zero();
        self.heap.push(Reverse((F::zero(), source as u32)));

        while let Some(Reverse((dist, vertex))) = self.heap.pop() {
            let vertex = vertex as usize;
            if dist > self.dist[vertex] {
                continue;
            }
            for &edge_id in network.out_edges(vertex) {
                let edge = network.edge(edge_id);
                if edge.residual() <= F::zero() {
                    continue;
                }
                let to = edge.to();
                let reduced =
                    dist + edge.cost() + self.potential[vertex] - self.potential[to];
                if reduced < self.dist[to] {
                    self.dist[to] = reduced;
                    self.parent_edge[to] = edge_id;
                    self.heap.push(Reverse((reduced, to as u32)));
                }
            }
        }
        self.parent_edge[sink] != NO_PARENT
    }
}
