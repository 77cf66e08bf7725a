use dcf_valuation::StatementTable;
use dcf_valuation::valuation::compute;

use crate::common::approx;

fn example_income() -> StatementTable {
    StatementTable::new()
        .with_line("Total Revenue", [100.0, 110.0, 121.0])
        .with_line("Operating Income", [20.0, 22.0, 24.2])
}

fn example_balance() -> StatementTable {
    StatementTable::new()
        .with_line("Total Assets", [500.0])
        .with_line("Total Liabilities Net Minority Interest", [300.0])
}

fn example_cash_flow() -> StatementTable {
    StatementTable::new()
        .with_line("Net Income", [50.0])
        .with_line("Depreciation", [10.0])
        .with_line("Change In Working Capital", [5.0])
        .with_line("Capital Expenditure", [20.0])
}

#[test]
fn two_period_revenue_growth_is_ten_percent() {
    let income = StatementTable::new().with_line("Total Revenue", [100.0, 110.0]);
    let m = compute(&income, &StatementTable::new(), &StatementTable::new(), 0.05, 0.10, 1).unwrap();
    assert!(approx(m.revenue_growth.unwrap(), 0.10, 1e-12));
}

#[test]
fn free_cash_flow_combines_latest_period_with_mean_capex() {
    let m = compute(
        &StatementTable::new(),
        &StatementTable::new(),
        &example_cash_flow(),
        0.05,
        0.10,
        3,
    )
    .unwrap();
    assert!(approx(m.free_cash_flow.unwrap(), 35.0, 1e-12));
}

#[test]
fn projections_compound_the_growth_rate() {
    let m = compute(
        &StatementTable::new(),
        &StatementTable::new(),
        &example_cash_flow(),
        0.05,
        0.10,
        3,
    )
    .unwrap();

    let expected = [36.75, 38.5875, 40.516875];
    assert_eq!(m.fcf_projections.len(), 3);
    for (got, want) in m.fcf_projections.iter().zip(expected) {
        assert!(approx(got.unwrap(), want, 1e-9), "got {got:?}, want {want}");
    }
}

#[test]
fn discount_factors_match_four_significant_figures() {
    let m = compute(
        &StatementTable::new(),
        &StatementTable::new(),
        &StatementTable::new(),
        0.05,
        0.10,
        3,
    )
    .unwrap();

    let expected = [0.9091, 0.8264, 0.7513];
    assert_eq!(m.discount_factors.len(), 3);
    for (got, want) in m.discount_factors.iter().zip(expected) {
        assert!(approx(*got, want, 5e-5), "got {got}, want {want}");
    }
}

#[test]
fn full_example_produces_every_metric() {
    let m = compute(
        &example_income(),
        &example_balance(),
        &example_cash_flow(),
        0.05,
        0.10,
        2,
    )
    .unwrap();

    assert!(approx(m.revenue_growth.unwrap(), 0.10, 1e-12));
    assert!(approx(m.operating_margin.unwrap(), 0.2, 1e-12));
    assert!(approx(m.working_capital.unwrap(), 200.0, 1e-12));
    assert!(approx(m.capex.unwrap(), 20.0, 1e-12));
    assert!(approx(m.free_cash_flow.unwrap(), 35.0, 1e-12));

    assert_eq!(m.fcf_projections.len(), 2);
    assert!(approx(m.fcf_projections[0].unwrap(), 36.75, 1e-9));
    assert!(approx(m.fcf_projections[1].unwrap(), 38.5875, 1e-9));

    assert!(approx(m.present_value_fcf.unwrap(), 65.29, 0.02));
    assert!(approx(m.terminal_value.unwrap(), 810.3375, 1e-6));
    assert!(approx(m.present_value_terminal.unwrap(), 669.70, 0.01));
    assert!(approx(m.enterprise_value.unwrap(), 734.99, 0.02));
}

#[test]
fn repeated_calls_are_identical() {
    let income = example_income();
    let balance = example_balance();
    let cash = example_cash_flow();

    let first = compute(&income, &balance, &cash, 0.05, 0.10, 5).unwrap();
    let second = compute(&income, &balance, &cash, 0.05, 0.10, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn calculator_runs_from_many_threads() {
    let income = example_income();
    let balance = example_balance();
    let cash = example_cash_flow();
    let reference = compute(&income, &balance, &cash, 0.05, 0.10, 4).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| compute(&income, &balance, &cash, 0.05, 0.10, 4).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), reference);
        }
    });
}
