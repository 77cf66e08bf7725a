use std::time::Duration;

use dcf_valuation::Backoff;

fn exponential(jitter: bool) -> Backoff {
    Backoff::Exponential {
        base: Duration::from_millis(200),
        factor: 2.0,
        max: Duration::from_secs(3),
        jitter,
    }
}

#[test]
fn fixed_delay_ignores_attempt() {
    let b = Backoff::Fixed(Duration::from_millis(50));
    assert_eq!(b.delay(0), Duration::from_millis(50));
    assert_eq!(b.delay(7), Duration::from_millis(50));
}

#[test]
fn exponential_without_jitter_doubles_up_to_max() {
    let b = exponential(false);
    assert_eq!(b.delay(0), Duration::from_millis(200));
    assert_eq!(b.delay(1), Duration::from_millis(400));
    assert_eq!(b.delay(2), Duration::from_millis(800));
    assert_eq!(b.delay(10), Duration::from_secs(3));
}

#[test]
fn jitter_spreads_delays_across_the_band() {
    let b = exponential(true);
    let delays: Vec<Duration> = (0..200).map(|_| b.delay(0)).collect();

    assert!(
        delays
            .iter()
            .all(|d| *d >= Duration::from_millis(100) && *d < Duration::from_millis(300)),
        "out of band: {delays:?}"
    );
    let min = delays.iter().min().copied().unwrap();
    let max = delays.iter().max().copied().unwrap();
    assert!(min < Duration::from_millis(150), "min {min:?}");
    assert!(max > Duration::from_millis(250), "max {max:?}");
}
