//! Monte Carlo replays agree with the solver's expectations.

use honing::pricing::MarketPrices;
use honing::simulator::{run_simulation, SimConfig};
use honing::strategy::{plan_honing, HoningOptions};
use honing::tier::{find_tier, EquipmentType, HoningTier, Material};

fn market() -> MarketPrices {
    let mut market = MarketPrices::with_currency_defaults();
    market.set("guardian-stone-crystal-0", 0.1);
    market.set("honor-shard", 0.05);
    market.set("honor-leapstone-2", 12.0);
    market.set("simple-oreha-fusion-material-1", 20.0);
    market.set("solar-grace-1", 15.0);
    market.set("solar-blessing-2", 40.0);
    market.set("solar-protection-3", 110.0);
    market.set("tailoring-basic-mending-3", 200.0);
    market
}

fn within(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected
}

#[test]
fn test_simulated_averages_match_boosted_plan() {
    let tier = find_tier(1325, EquipmentType::Armor).unwrap();
    let plan = plan_honing(&tier, &market(), &HoningOptions::default()).unwrap();
    let report = run_simulation(&plan, &SimConfig::seeded(20_000, 1234));

    assert_eq!(report.runs_succeeded, report.num_runs);
    assert!(report.max_attempts as usize <= plan.steps.len());
    assert!(
        within(report.avg_attempts, plan.expected_attempts, 0.03),
        "simulated {} vs expected {}",
        report.avg_attempts,
        plan.expected_attempts
    );
    assert!(
        within(report.avg_cost, plan.expected_cost, 0.03),
        "simulated {} vs expected {}",
        report.avg_cost,
        plan.expected_cost
    );
}

#[test]
fn test_simulated_half_rate_chain() {
    let tier = HoningTier::basic(
        1340,
        EquipmentType::Weapon,
        5000,
        vec![Material::new("gold", 100)],
    );
    let plan = plan_honing(&tier, &market(), &HoningOptions::default()).unwrap();
    let report = run_simulation(&plan, &SimConfig::seeded(20_000, 99));

    assert_eq!(report.max_attempts, 5);
    assert_eq!(report.success_by_attempt.len(), 5);
    assert!(within(report.avg_attempts, 1.8465, 0.03));
    // Roughly half the chains end on the first attempt
    let first = report.success_by_attempt[0] as f64 / report.num_runs as f64;
    assert!((first - 0.5).abs() < 0.02);
}

#[test]
fn test_guaranteed_plan_always_one_attempt() {
    let tier = find_tier(1310, EquipmentType::Armor).unwrap();
    let plan = plan_honing(&tier, &market(), &HoningOptions::default()).unwrap();
    let report = run_simulation(&plan, &SimConfig::seeded(500, 5));
    assert_eq!(report.avg_attempts, 1.0);
    assert_eq!(report.max_attempts, 1);
    assert!((report.avg_cost - plan.expected_cost).abs() < 1e-9);
}
