//! Chooses which delivery zones to activate and which jobs to take.
//!
//! Activating a zone costs money once; every job pays a reward but needs all
//! of its zones active. The best net profit equals the total reward minus the
//! value of a maximum flow in which zone activation costs and job rewards
//! bound the arcs: the flow saturates exactly the cheapest set of activations
//! worth paying for.

use anyhow::Result;
use flow_reductions::{FlowNetwork, MaxFlowSolver};
use proconio::input;

fn net_profit(
    zone_costs: &[i64],
    job_rewards: &[i64],
    eligible_zones: &[Vec<usize>],
    solver: &mut MaxFlowSolver,
) -> Result<i64> {
    let num_zones = zone_costs.len();
    let num_jobs = job_rewards.len();

    let mut network = FlowNetwork::with_capacity(
        num_zones + num_jobs + 2,
        num_zones + num_jobs + eligible_zones.iter().map(Vec::len).sum::<usize>(),
    );
    let source = num_zones + num_jobs;
    let sink = source + 1;

    for (zone, &cost) in zone_costs.iter().enumerate() {
        network.add_unweighted(source, zone, cost)?;
    }
    let mut total_reward = 0;
    for (job, &reward) in job_rewards.iter().enumerate() {
        total_reward += reward;
        network.add_unweighted(num_zones + job, sink, reward)?;
    }
    for (job, zones) in eligible_zones.iter().enumerate() {
        for &zone in zones {
            // the zone's cost again, as a capacity: a job never pays more
            // of an activation than the activation is worth
            network.add_unweighted(zone, num_zones + job, zone_costs[zone])?;
        }
    }

    let flow = solver.solve(&mut network, source, sink)?;
    Ok(total_reward - flow)
}

fn main() -> Result<()> {
    input! {
        num_instances: usize,
    }
    let mut solver = MaxFlowSolver::new(0);
    for _ in 0..num_instances {
        input! {
            z: usize,
            j: usize,
            zone_costs: [i64; z],
            job_rewards: [i64; j],
        }
        let mut eligible_zones = Vec::with_capacity(j);
        for _ in 0..j {
            input! {
                k: usize,
                zones: [usize; k],
            }
            eligible_zones.push(zones);
        }
        let profit = net_profit(&zone_costs, &job_rewards, &eligible_zones, &mut solver)?;
        println!("{}", profit);
    }
    Ok(())
}
