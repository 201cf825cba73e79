use anyhow::{ensure, Result};
use num_traits::{NumAssign, PrimInt, Signed};
use std::fmt::{Debug, Display};

/// Trait alias for the integer type carrying capacities, flow and costs.
///
/// Costs on reverse edges are negated, so the type must be signed even though
/// all user-supplied capacities and costs are non-negative.
pub trait FlowQuantity: PrimInt + Signed + NumAssign + Display + Debug {}

impl FlowQuantity for i32 {}
impl FlowQuantity for i64 {}
impl FlowQuantity for isize {}

/// One directed arc of the residual graph.
///
/// Arcs live in a single arena indexed by `u32`; `rev` is the arena index of
/// the paired arc in the opposite direction. Forward arcs sit at even indices,
/// their reverse companions at the following odd index.
#[derive(Clone, Debug)]
pub struct FlowEdge<F: FlowQuantity> {
    to: u32,
    capacity: F,
    flow: F,
    cost: F,
    rev: u32,
}

impl<F: FlowQuantity> FlowEdge<F> {
    #[inline]
    pub fn to(&self) -> usize {
        self.to as usize
    }

    #[inline]
    pub fn capacity(&self) -> F {
        self.capacity
    }

    #[inline]
    pub fn cost(&self) -> F {
        self.cost
    }

    /// Units currently routed through this arc. Negative on reverse arcs that
    /// cancel routed flow.
    #[inline]
    pub fn flow(&self) -> F {
        self.flow
    }

    /// Remaining headroom of this arc: `capacity - flow`.
    #[inline]
    pub fn residual(&self) -> F {
        self.capacity - self.flow
    }

    #[inline]
    pub fn rev(&self) -> usize {
        self.rev as usize
    }
}

/// A forward arc together with its endpoints, as seen by [`FlowNetwork::forward_edges`].
#[derive(Clone, Copy, Debug)]
pub struct ForwardEdgeView<F: FlowQuantity> {
    pub from: usize,
    pub to: usize,
    pub capacity: F,
    pub cost: F,
    pub flow: F,
}

/// Directed flow network with per-arc capacity and cost.
///
/// Vertices are plain `usize` indices without attributes. Every call to
/// [`add_edge`](FlowNetwork::add_edge) registers the forward arc and its
/// residual companion (zero capacity, negated cost) in one step, so solvers
/// can always cancel routed flow by walking `rev` indices.
#[derive(Clone, Debug)]
pub struct FlowNetwork<F: FlowQuantity> {
    adjacency: Vec<Vec<u32>>,
    edges: Vec<FlowEdge<F>>,
}

impl<F: FlowQuantity> FlowNetwork<F> {
    pub fn new(num_vertices: usize) -> Self {
        Self::with_capacity(num_vertices, 0)
    }

    /// Preallocates room for `arcs_capacity` forward arcs (twice as many arena
    /// slots, counting reverse companions).
    pub fn with_capacity(num_vertices: usize, arcs_capacity: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_vertices],
            edges: Vec::with_capacity(arcs_capacity * 2),
        }
    }

    /// Appends a fresh isolated vertex and returns its index. Used for
    /// synthetic sources and sinks that are numbered after the problem
    /// entities.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of forward arcs added so far (reverse companions not counted).
    #[inline]
    pub fn num_of_arcs(&self) -> usize {
        self.edges.len() / 2
    }

    /// Inserts the arc `from -> to` and its zero-capacity reverse companion.
    ///
    /// The companion carries `-cost` so that cancelling a unit of flow refunds
    /// exactly what routing it charged.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: F, cost: F) -> Result<()> {
        ensure!(from < self.adjacency.len());
        ensure!(to < self.adjacency.len());
        ensure!(capacity >= F::zero());
        ensure!(self.edges.len() + 2 <= u32::MAX as usize);

        let forward_id = self.edges.len() as u32;
        self.edges.push(FlowEdge {
            to: to as u32,
            capacity,
            flow: F::zero(),
            cost,
            rev: forward_id + 1,
        });
        self.edges.push(FlowEdge {
            to: from as u32,
            capacity: F::zero(),
            flow: F::zero(),
            cost: -cost,
            rev: forward_id,
        });
        self.adjacency[from].push(forward_id);
        self.adjacency[to].push(forward_id + 1);
        Ok(())
    }

    /// Cost-free arc, for pure max-flow constructions.
    #[inline]
    pub fn add_unweighted(&mut self, from: usize, to: usize, capacity: F) -> Result<()> {
        self.add_edge(from, to, capacity, F::zero())
    }

    #[inline]
    pub fn out_edges(&self, vertex: usize) -> &[u32] {
        &self.adjacency[vertex]
    }

    #[inline]
    pub fn edge(&self, edge_id: u32) -> &FlowEdge<F> {
        &self.edges[edge_id as usize]
    }

    /// Tail vertex of an arc, recovered through its reverse companion.
    #[inline]
    pub fn edge_tail(&self, edge_id: u32) -> usize {
        self.edges[self.edges[edge_id as usize].rev as usize].to as usize
    }

    /// Routes `delta` additional units through the arc, debiting the residual
    /// capacity of its reverse companion.
    #[inline]
    pub(crate) fn push(&mut self, edge_id: u32, delta: F) {
        let rev = self.edges[edge_id as usize].rev as usize;
        self.edges[edge_id as usize].flow += delta;
        self.edges[rev].flow -= delta;
    }

    /// Iterates all forward arcs with their endpoints and current flow.
    pub fn forward_edges(&self) -> impl Iterator<Item = ForwardEdgeView<F>> + '_ {
        self.edges.iter().step_by(2).map(move |edge| ForwardEdgeView {
            from: self.edges[edge.rev as usize].to as usize,
            to: edge.to as usize,
            capacity: edge.capacity,
            cost: edge.cost,
            flow: edge.flow,
        })
    }

    /// Sum of capacities of forward arcs leaving `vertex`. An upper bound on
    /// any flow value when `vertex` is the source.
    pub fn out_capacity(&self, vertex: usize) -> F {
        self.adjacency[vertex]
            .iter()
            .map(|&edge_id| &self.edges[edge_id as usize])
            .filter(|edge| edge.capacity > F::zero())
            .fold(F::zero(), |acc, edge| acc + edge.capacity)
    }

    /// Sum of capacities of forward arcs entering `vertex`. An upper bound on
    /// any flow value when `vertex` is the sink.
    pub fn in_capacity(&self, vertex: usize) -> F {
        self.forward_edges()
            .filter(|view| view.to == vertex)
            .fold(F::zero(), |acc, view| acc + view.capacity)
    }
}
