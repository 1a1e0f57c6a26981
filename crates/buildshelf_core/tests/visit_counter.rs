use buildshelf_core::{process_visits, VisitCounter};
use std::sync::Arc;
use std::thread;

#[test]
fn concurrent_increments_are_each_observed_exactly_once() {
    const THREADS: usize = 8;
    const VISITS_PER_THREAD: usize = 1000;

    let counter = Arc::new(VisitCounter::new());
    let mut handles = Vec::new();
    for _ in 0..THREADS {
        let counter = Arc::clone(&counter);
        handles.push(thread::spawn(move || {
            for _ in 0..VISITS_PER_THREAD {
                counter.record();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.total(), (THREADS * VISITS_PER_THREAD) as u64);
}

#[test]
fn record_returns_a_count_no_lower_than_one() {
    let counter = VisitCounter::new();
    assert_eq!(counter.total(), 0);
    assert_eq!(counter.record(), 1);
    assert!(counter.record() >= 2);
}

#[test]
fn process_counter_is_shared_across_threads() {
    let before = process_visits().total();

    let handle = thread::spawn(|| {
        process_visits().record();
        process_visits().record();
    });
    handle.join().unwrap();

    assert!(process_visits().total() >= before + 2);
}
