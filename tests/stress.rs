//! Multi-threaded stress tests: the linearizability, parity and
//! no-lost-update properties that the containers promise under contention.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;

use crossbeam_utils::thread;
use quark::{AtomicArc, AtomicBool, AtomicF64, AtomicI64, AtomicString, AtomicU64, AtomicValue};

const THREADS: usize = 8;
const PER_THREAD: usize = 1_000;

#[test]
fn toggle_parity_even() {
    let flag = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..PER_THREAD {
                    flag.toggle();
                }
            });
        }
    })
    .unwrap();

    // THREADS * PER_THREAD flips is even: back where we started.
    assert!(!flag.load());
}

#[test]
fn toggle_parity_odd() {
    let flag = AtomicBool::new(false);
    let flips = THREADS * PER_THREAD + 1;

    thread::scope(|s| {
        let flag = &flag;
        for worker in 0..THREADS {
            s.spawn(move |_| {
                let extra = usize::from(worker == 0);
                for _ in 0..PER_THREAD + extra {
                    flag.toggle();
                }
            });
        }
    })
    .unwrap();

    assert_eq!(flag.load(), flips % 2 == 1);
}

#[test]
fn float_add_loses_no_updates() {
    let total = AtomicF64::new(0.0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..PER_THREAD {
                    total.add(1.0);
                }
            });
        }
    })
    .unwrap();

    // Increments of 1.0 are exactly representable, so the comparison is
    // bit-exact: any lost update would show.
    #[allow(clippy::cast_precision_loss)]
    let expected = (THREADS * PER_THREAD) as f64;
    assert_eq!(total.load(), expected);
}

#[test]
fn integer_add_loses_no_updates() {
    let counter = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..PER_THREAD {
                    counter.add(1);
                }
            });
        }
    })
    .unwrap();

    assert_eq!(counter.load(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn loads_only_observe_written_values() {
    let cell = AtomicI64::new(0);

    thread::scope(|s| {
        let cell = &cell;
        for worker in 0..THREADS as i64 {
            s.spawn(move |_| {
                for i in 0..PER_THREAD as i64 {
                    // Every write is tagged with its origin.
                    let value = worker * 1_000_000 + i;
                    if i % 2 == 0 {
                        cell.store(value);
                    } else {
                        cell.swap(value);
                    }

                    let seen = cell.load();
                    let (from_worker, seq) = (seen / 1_000_000, seen % 1_000_000);
                    assert!(seen == 0 || ((0..THREADS as i64).contains(&from_worker) && seq < PER_THREAD as i64));
                }
            });
        }
    })
    .unwrap();
}

#[test]
fn swap_hands_every_value_to_exactly_one_observer() {
    let slot: AtomicArc<usize> = AtomicArc::empty();
    let observed = Mutex::new(Vec::new());

    thread::scope(|s| {
        let (slot, observed) = (&slot, &observed);
        for worker in 0..THREADS {
            s.spawn(move |_| {
                let previous = slot.swap(Some(Arc::new(worker)));
                observed.lock().unwrap().push(previous.map(|p| *p));
            });
        }
    })
    .unwrap();

    let mut seen: Vec<Option<usize>> = observed.into_inner().unwrap();
    seen.push(slot.load().map(|p| *p));

    // The initial None plus each stored value surfaces exactly once, either
    // as some swap's return or as the final contents.
    let unique: HashSet<_> = seen.iter().copied().collect();
    assert_eq!(seen.len(), THREADS + 1);
    assert_eq!(unique.len(), THREADS + 1);
    assert!(unique.contains(&None));
    for worker in 0..THREADS {
        assert!(unique.contains(&Some(worker)));
    }
}

#[test]
fn string_content_cas_counts_every_increment() {
    let counter = AtomicString::new("0");

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..100 {
                    loop {
                        let current = counter.load();
                        let next = (current.parse::<u64>().unwrap() + 1).to_string();
                        if counter.compare_and_swap(&current, next) {
                            break;
                        }
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(counter.load(), (THREADS * 100).to_string());
}

#[test]
fn numeric_cas_loop_counts_every_increment() {
    let counter = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..PER_THREAD {
                    counter.update(|v| v + 1);
                }
            });
        }
    })
    .unwrap();

    assert_eq!(counter.load(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn concurrent_string_stores_leave_a_written_value() {
    let label = AtomicString::empty();

    thread::scope(|s| {
        let label = &label;
        for worker in 0..THREADS {
            s.spawn(move |_| {
                let text = format!("worker-{worker}");
                for _ in 0..100 {
                    label.store(text.clone());
                    let seen = label.load();
                    assert!(seen.is_empty() || seen.starts_with("worker-"));
                }
            });
        }
    })
    .unwrap();

    assert!(label.load().starts_with("worker-"));
}
