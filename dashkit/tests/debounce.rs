use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashkit::debounce::Debouncer;

fn recorder() -> (Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
    (Arc::new(AtomicUsize::new(0)), Arc::new(Mutex::new(Vec::new())))
}

fn record(debouncer: &Debouncer, calls: &Arc<AtomicUsize>, seen: &Arc<Mutex<Vec<String>>>, arg: &str) {
    let calls = Arc::clone(calls);
    let seen = Arc::clone(seen);
    let arg = arg.to_string();
    debouncer.call(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        seen.lock().unwrap().push(arg);
    });
}

#[tokio::test(start_paused = true)]
async fn test_burst_runs_once_with_last_argument() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let (calls, seen) = recorder();

    for arg in ["a", "ab", "abc", "abcd"] {
        record(&debouncer, &calls, &seen, arg);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(debouncer.is_pending());

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(*seen.lock().unwrap(), vec!["abcd"]);
    assert!(!debouncer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_spaced_calls_each_run() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let (calls, seen) = recorder();

    record(&debouncer, &calls, &seen, "first");
    tokio::time::sleep(Duration::from_millis(400)).await;
    record(&debouncer, &calls, &seen, "second");
    tokio::time::sleep(Duration::from_millis(400)).await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_pending_call() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let (calls, seen) = recorder();

    record(&debouncer, &calls, &seen, "x");
    debouncer.cancel();
    assert!(!debouncer.is_pending());

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_pending_slot() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let clone = debouncer.clone();
    let (calls, seen) = recorder();

    record(&debouncer, &calls, &seen, "from original");
    record(&clone, &calls, &seen, "from clone");
    tokio::time::sleep(Duration::from_millis(301)).await;

    assert_eq!(*seen.lock().unwrap(), vec!["from clone"]);
}

#[test]
fn test_without_runtime_runs_immediately() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    let (calls, seen) = recorder();

    record(&debouncer, &calls, &seen, "now");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!debouncer.is_pending());
}
