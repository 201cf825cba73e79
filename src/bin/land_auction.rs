//! Sells building sites to bidding buyers, maximizing the auctioneer's take.
//!
//! Buyers place one bid per site, each buyer wins at most one site, and every
//! region caps how many of its sites may be sold. Selling assignments are
//! exactly the integral flows of a four-layer network, so the best sale is a
//! min-cost max-flow with bids inverted under their upper bound.

use anyhow::Result;
use flow_reductions::{FlowNetwork, MinCostSolver};
use proconio::input;
use proconio::marker::Usize1;

/// Highest admissible bid in the input format; bids are stored as
/// `BID_BOUND - bid` to keep arc costs non-negative.
const BID_BOUND: i64 = 100;

/// Returns `(sites_sold, total_revenue)`.
fn best_sale(
    limits: &[i64],
    site_region: &[usize],
    bids: &[Vec<i64>],
    solver: &mut MinCostSolver<i64>,
) -> Result<(i64, i64)> {
    let num_buyers = bids.len();
    let num_sites = site_region.len();
    let num_regions = limits.len();

    let mut network = FlowNetwork::with_capacity(
        num_buyers + num_sites + num_regions + 2,
        num_buyers + num_sites + num_regions + num_buyers * num_sites,
    );
    let source = num_buyers + num_sites + num_regions;
    let sink = source + 1;

    // each buyer takes at most one site
    for buyer in 0..num_buyers {
        network.add_unweighted(source, buyer, 1)?;
    }
    // regional sale limits
    for (region, &limit) in limits.iter().enumerate() {
        network.add_unweighted(num_buyers + num_sites + region, sink, limit)?;
    }
    // each site is sold at most once, against its region's budget
    for (site, &region) in site_region.iter().enumerate() {
        network.add_unweighted(num_buyers + site, num_buyers + num_sites + region, 1)?;
    }
    // bids, inverted under the bound so the min-cost flow maximizes revenue
    for (buyer, row) in bids.iter().enumerate() {
        for (site, &bid) in row.iter().enumerate() {
            network.add_edge(buyer, num_buyers + site, 1, BID_BOUND - bid)?;
        }
    }

    let summary = solver.solve(&mut network, source, sink)?;
    Ok((summary.flow, summary.flow * BID_BOUND - summary.cost))
}

fn main() -> Result<()> {
    input! {
        num_instances: usize,
    }
    let mut solver = MinCostSolver::new(0);
    for _ in 0..num_instances {
        input! {
            n: usize,
            m: usize,
            r: usize,
            limits: [i64; r],
            site_region: [Usize1; m],
            bids: [[i64; m]; n],
        }
        let (sold, revenue) = best_sale(&limits, &site_region, &bids, &mut solver)?;
        println!("{} {}", sold, revenue);
    }
    Ok(())
}
