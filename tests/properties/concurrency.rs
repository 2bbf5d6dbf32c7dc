//! Concurrent writers on shared cells.
//!
//! Setters on one cell serialize behind the cell's lock, so a reader can never
//! observe a value of the wrong type, no matter how writes interleave.

use crate::common::*;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

const THREADS: usize = 8;
const WRITES_PER_THREAD: usize = 500;

#[test]
fn concurrent_writers_never_break_the_pinned_type() {
    let props = quiet_builder()
        .build(&json_values(json!({"counter": 0, "label": "start"})))
        .unwrap();
    let barrier = Barrier::new(THREADS);
    let rejected = AtomicUsize::new(0);

    thread::scope(|s| {
        for t in 0..THREADS {
            let props = &props;
            let barrier = &barrier;
            let rejected = &rejected;
            s.spawn(move || {
                barrier.wait();
                for i in 0..WRITES_PER_THREAD {
                    let result = if i % 2 == 0 {
                        props.set("counter", (t * WRITES_PER_THREAD + i) as i64)
                    } else {
                        props.set("counter", format!("thread-{t}"))
                    };
                    let outcome = result.unwrap();
                    if outcome.is_rejected() {
                        rejected.fetch_add(1, Ordering::Relaxed);
                    }
                    assert_eq!(props.get("counter").unwrap().type_tag(), TypeTag::NUMBER);
                }
            });
        }
    });

    assert_eq!(
        rejected.load(Ordering::Relaxed),
        THREADS * WRITES_PER_THREAD / 2
    );
    assert_eq!(props.tag_of("counter"), Some(&TypeTag::NUMBER));
    assert_eq!(props.get("label"), Some(Value::from("start")));
}

#[test]
fn last_accepted_write_wins() {
    let cell = quiet_factory().create_cell(Value::from("")).unwrap();
    let values: Vec<String> = (0..THREADS).map(|t| format!("writer-{t}")).collect();

    thread::scope(|s| {
        for value in &values {
            let cell = &cell;
            s.spawn(move || {
                cell.set(Value::from(value.as_str()));
                cell.set(Value::Number(1.0));
            });
        }
    });

    let last = cell.get();
    assert!(values.iter().any(|v| Value::from(v.as_str()) == last));
}
