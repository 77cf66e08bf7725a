use dcf_valuation::StatementTable;
use dcf_valuation::valuation::compute;

fn cash_flow() -> StatementTable {
    StatementTable::new()
        .with_line("Net Income", [50.0])
        .with_line("Depreciation", [10.0])
        .with_line("Change In Working Capital", [5.0])
        .with_line("Capital Expenditure", [20.0])
}

#[test]
fn equal_rates_leave_terminal_and_enterprise_value_undefined() {
    let empty = StatementTable::new();
    let m = compute(&empty, &empty, &cash_flow(), 0.07, 0.07, 3).unwrap();

    assert_eq!(m.terminal_value, None);
    assert_eq!(m.present_value_terminal, None);
    assert_eq!(m.enterprise_value, None);
    // Everything before the terminal value is still computed.
    assert!(m.fcf_projections.iter().all(Option::is_some));
    assert!(m.present_value_fcf.is_some());
}

#[test]
fn discount_below_growth_does_not_produce_a_negative_value() {
    let empty = StatementTable::new();
    let m = compute(&empty, &empty, &cash_flow(), 0.10, 0.05, 3).unwrap();

    assert_eq!(m.terminal_value, None);
    assert_eq!(m.enterprise_value, None);
    assert!(m.present_value_fcf.unwrap() > 0.0);
}

#[test]
fn zero_discount_rate_is_allowed_when_growth_is_negative() {
    let empty = StatementTable::new();
    let m = compute(&empty, &empty, &cash_flow(), -0.02, 0.0, 2).unwrap();

    assert_eq!(m.discount_factors, vec![1.0, 1.0]);
    let tv = m.terminal_value.unwrap();
    // 35 * 0.98^2 * 0.98 / 0.02
    assert!((tv - 35.0 * 0.98_f64.powi(3) / 0.02).abs() < 1e-9);
    assert!(m.enterprise_value.is_some());
}

#[test]
fn horizon_of_one_year_uses_the_single_projection() {
    let empty = StatementTable::new();
    let m = compute(&empty, &empty, &cash_flow(), 0.05, 0.10, 1).unwrap();

    assert_eq!(m.fcf_projections.len(), 1);
    let last = m.fcf_projections[0].unwrap();
    let tv = m.terminal_value.unwrap();
    assert!((tv - last * 1.05 / 0.05).abs() < 1e-9);
    assert!((m.present_value_terminal.unwrap() - tv / 1.1).abs() < 1e-9);
}

#[test]
fn overflowing_projections_become_undefined() {
    let empty = StatementTable::new();
    // 6^i overflows f64 well before year 1000.
    let m = compute(&empty, &empty, &cash_flow(), 5.0, 0.10, 1000).unwrap();

    assert!(m.fcf_projections[0].is_some());
    assert_eq!(m.fcf_projections.last().copied().flatten(), None);
    assert!(
        m.fcf_projections
            .iter()
            .flatten()
            .all(|v| v.is_finite())
    );
    assert_eq!(m.present_value_fcf, None);
    assert_eq!(m.enterprise_value, None);
}

#[test]
fn long_horizon_never_reports_non_finite_values() {
    let empty = StatementTable::new();
    for (g, r) in [(0.05, 0.10), (0.5, 0.10), (5.0, 10.0), (-0.5, -0.9)] {
        let m = compute(&empty, &empty, &cash_flow(), g, r, 1000).unwrap();
        let defined = [
            m.terminal_value,
            m.present_value_fcf,
            m.present_value_terminal,
            m.enterprise_value,
        ];
        assert!(
            defined.iter().flatten().all(|v| v.is_finite()),
            "g={g} r={r}: {defined:?}"
        );
        assert!(m.fcf_projections.iter().flatten().all(|v| v.is_finite()));
    }
}
