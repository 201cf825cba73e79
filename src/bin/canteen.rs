//! Plans menu production over a run of days.
//!
//! Each day can cook a limited number of menus at a per-menu cost, sells up to
//! its demand at a per-menu price, and may refrigerate leftovers overnight for
//! a fee. Production plans are flows through a chain of day vertices; selling
//! prices are inverted under their upper bound so the min-cost flow maximizes
//! profit. Falling short of the total demand is a reportable outcome, not an
//! error.

use anyhow::Result;
use flow_reductions::{FlowNetwork, MinCostSolver};
use proconio::input;

/// Highest admissible selling price per menu; prices enter the network as
/// `PRICE_BOUND - price`.
const PRICE_BOUND: i64 = 20;

/// Returns `(demand_met, menus_sold, profit)`.
fn plan_production(
    production: &[(i64, i64)],
    demand: &[(i64, i64)],
    storage: &[(i64, i64)],
    solver: &mut MinCostSolver<i64>,
) -> Result<(bool, i64, i64)> {
    let num_days = production.len();
    let mut network =
        FlowNetwork::with_capacity(num_days, 2 * num_days + storage.len());
    let source = network.add_vertex();
    let sink = network.add_vertex();

    for (day, &(amount, cost)) in production.iter().enumerate() {
        network.add_edge(source, day, amount, cost)?;
    }
    let mut required = 0;
    for (day, &(students, price)) in demand.iter().enumerate() {
        required += students;
        network.add_edge(day, sink, students, PRICE_BOUND - price)?;
    }
    // refrigerated leftovers carry over to the next day
    for (day, &(volume, fee)) in storage.iter().enumerate() {
        network.add_edge(day, day + 1, volume, fee)?;
    }

    let summary = solver.solve(&mut network, source, sink)?;
    let profit = summary.flow * PRICE_BOUND - summary.cost;
    Ok((summary.flow >= required, summary.flow, profit))
}

fn main() -> Result<()> {
    input! {
        num_instances: usize,
    }
    let mut solver = MinCostSolver::new(0);
    for _ in 0..num_instances {
        input! {
            n: usize,
            production: [(i64, i64); n],
            demand: [(i64, i64); n],
            storage: [(i64, i64); n - 1],
        }
        let (feasible, sold, profit) =
            plan_production(&production, &demand, &storage, &mut solver)?;
        let verdict = if feasible { "possible" } else { "impossible" };
        println!("{} {} {}", verdict, sold, profit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day_exact_demand() {
        let mut solver = MinCostSolver::new(0);
        // cook 4 at cost 2 each, sell 4 at price 5 each
        let (feasible, sold, profit) =
            plan_production(&[(4, 2)], &[(4, 5)], &[], &mut solver).unwrap();
        assert!(feasible);
        assert_eq!(sold, 4);
        assert_eq!(profit, 4 * (5 - 2));
    }

    #[test]
    fn test_shortfall_is_reported_not_fatal() {
        let mut solver = MinCostSolver::new(0);
        // demand 6, capacity 4: numbers still reported alongside the verdict
        let (feasible, sold, profit) =
            plan_production(&[(4, 1)], &[(6, 3)], &[], &mut solver).unwrap();
        assert!(!feasible);
        assert_eq!(sold, 4);
        assert_eq!(profit, 4 * (3 - 1));
    }

    #[test]
    fn test_storage_carries_surplus_forward() {
        let mut solver = MinCostSolver::new(0);
        // day 0 overproduces cheaply, day 1 cannot cook at all
        let production = [(5, 1), (0, 1)];
        let demand = [(2, 4), (3, 4)];
        let storage = [(3, 1)];
        let (feasible, sold, profit) =
            plan_production(&production, &demand, &storage, &mut solver).unwrap();
        assert!(feasible);
        assert_eq!(sold, 5);
        // 5 cooked at 1, 3 refrigerated at 1, all sold at 4
        assert_eq!(profit, 5 * 4 - 5 * 1 - 3 * 1);
    }

    #[test]
    fn test_storage_capacity_limits_carry_over() {
        let mut solver = MinCostSolver::new(0);
        let production = [(5, 1), (0, 1)];
        let demand = [(2, 4), (3, 4)];
        let storage = [(1, 1)];
        let (feasible, sold, _) =
            plan_production(&production, &demand, &storage, &mut solver).unwrap();
        assert!(!feasible);
        assert_eq!(sold, 3);
    }

    #[test]
    fn test_unprofitable_sales_still_count_toward_demand() {
        let mut solver = MinCostSolver::new(0);
        // selling below cost loses money but the flow still covers demand
        let (feasible, sold, profit) =
            plan_production(&[(2, 9)], &[(2, 3)], &[], &mut solver).unwrap();
        assert!(feasible);
        assert_eq!(sold, 2);
        assert_eq!(profit, 2 * (3 - 9));
    }
}
