use dcf_valuation::report::{NOT_AVAILABLE, Style, format_metric};

#[test]
fn undefined_and_non_finite_values_are_not_available() {
    for style in [Style::Percent, Style::Money, Style::Factor] {
        assert_eq!(format_metric(None, style), NOT_AVAILABLE);
        assert_eq!(format_metric(Some(f64::NAN), style), NOT_AVAILABLE);
        assert_eq!(format_metric(Some(f64::INFINITY), style), NOT_AVAILABLE);
    }
}

#[test]
fn percentages_have_two_decimals() {
    assert_eq!(format_metric(Some(0.05), Style::Percent), "5.00%");
    assert_eq!(format_metric(Some(-0.125), Style::Percent), "-12.50%");
    assert_eq!(format_metric(Some(0.0), Style::Percent), "0.00%");
}

#[test]
fn money_groups_thousands() {
    assert_eq!(format_metric(Some(735.0), Style::Money), "735.00");
    assert_eq!(format_metric(Some(1000.0), Style::Money), "1,000.00");
    assert_eq!(format_metric(Some(123_456.789), Style::Money), "123,456.79");
    assert_eq!(format_metric(Some(-20.0), Style::Money), "-20.00");
    assert_eq!(format_metric(Some(-100_000.0), Style::Money), "-100,000.00");
}

#[test]
fn factors_have_four_decimals() {
    assert_eq!(format_metric(Some(1.0 / 1.1), Style::Factor), "0.9091");
    assert_eq!(format_metric(Some(1.0), Style::Factor), "1.0000");
}
