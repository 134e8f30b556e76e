use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashkit::animation::*;

// =============================================================================
// Number formatting
// =============================================================================

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1000), "1,000");
    assert_eq!(format_number(1234567), "1,234,567");
    assert_eq!(format_number(-45210), "-45,210");
    assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
}

#[test]
fn test_parse_counter() {
    assert_eq!(parse_counter("1,250"), 1250);
    assert_eq!(parse_counter("  1,250 SAR"), 1250);
    assert_eq!(parse_counter("-17"), -17);
    assert_eq!(parse_counter("+8"), 8);
    assert_eq!(parse_counter("SAR 10"), 0);
    assert_eq!(parse_counter(""), 0);
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn test_counter_reaches_end_exactly() {
    let animation = CounterAnimation::to(1000);
    assert_eq!(animation.frame(0).value, 0);
    assert!(!animation.frame(0).done);

    let mut tick = 1;
    let last = loop {
        let frame = animation.frame(tick);
        if frame.done {
            break frame;
        }
        assert!(frame.value > 0 && frame.value < 1000);
        tick += 1;
    };
    assert_eq!(last.value, 1000);
    assert_eq!(last.text, "1,000");
    // 1000 ms at 16 ms per frame.
    assert_eq!(tick, 63);
}

#[test]
fn test_counter_is_monotonic() {
    let animation = CounterAnimation::new(0, 45210, COUNTER_DURATION);
    let values: Vec<i64> = (0..70).map(|t| animation.frame(t).value).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*values.last().unwrap(), 45210);
}

#[test]
fn test_counter_counts_down() {
    let animation = CounterAnimation::new(100, 0, Duration::from_millis(160));
    assert_eq!(animation.frame(5).value, 50);
    let end = animation.frame(10);
    assert_eq!(end.value, 0);
    assert!(end.done);
}

#[test]
fn test_counter_degenerate_cases_finish_on_first_tick() {
    let same = CounterAnimation::to(0);
    assert!(same.frame(1).done);

    let instant = CounterAnimation::new(0, 500, Duration::ZERO);
    assert_eq!(instant.frame(0).value, 0);
    let frame = instant.frame(1);
    assert!(frame.done);
    assert_eq!(frame.value, 500);
}

#[tokio::test(start_paused = true)]
async fn test_run_emits_frames_until_done() {
    let texts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&texts);

    CounterAnimation::new(0, 1500, Duration::from_millis(160))
        .run(move |text| sink.lock().unwrap().push(text))
        .await;

    let texts = texts.lock().unwrap();
    assert_eq!(texts.len(), 10);
    assert_eq!(texts.first().map(String::as_str), Some("150"));
    assert_eq!(texts.last().map(String::as_str), Some("1,500"));
}
