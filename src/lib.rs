//! Building blocks for solving allocation and coverage problems by reduction.
//!
//! The crate bundles the three routines the bundled programs reduce to:
//!
//! - [`MaxFlowSolver`] computes maximum flow over a [`FlowNetwork`],
//! - [`MinCostSolver`] computes a maximum flow of minimum total cost,
//! - [`smallest_enclosing_circle`] computes the exact minimum enclosing
//!   circle of integer points, with a radius ceiling that never trusts
//!   floating-point rounding.
//!
//! Networks pair every forward arc with a zero-capacity reverse arc carrying
//! the negated cost, so the solvers can cancel routed flow. The min-cost
//! solver only accepts non-negative forward costs; profit-style weights are
//! expected to be subtracted from a known upper bound by the caller, with the
//! transform inverted when reporting.

pub mod circle;
pub mod maxflow;
pub mod mincost;
pub mod network;

pub use circle::{smallest_enclosing_circle, EnclosingCircle, Point};
pub use maxflow::MaxFlowSolver;
pub use mincost::{FlowSummary, MinCostSolver};
pub use network::{FlowNetwork, FlowQuantity};
