#![allow(clippy::unwrap_used, clippy::expect_used)]

use fanlog::{LogDispatcher, LogSink, Severity};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

const WORKERS: usize = 8;
const MESSAGES_PER_WORKER: usize = 50;

/// Records every emitted line in arrival order.
struct RecordingSink(Arc<Mutex<Vec<String>>>);

impl LogSink for RecordingSink {
    fn accepts(&self, _severity: Severity) -> bool {
        true
    }
    fn emit(&self, _severity: Severity, text: &str) {
        self.0.lock().unwrap().push(text.to_owned());
    }
}

/// Writes to a shared stream one character at a time, the worst case for
/// interleaving if dispatch were not serialized.
struct SharedStreamSink(Arc<Mutex<String>>);

impl LogSink for SharedStreamSink {
    fn accepts(&self, _severity: Severity) -> bool {
        true
    }
    fn emit(&self, _severity: Severity, text: &str) {
        let mut stream = self.0.lock().unwrap();
        for c in text.chars() {
            stream.push(c);
        }
        stream.push('\n');
    }
}

fn spawn_workers(dispatcher: &Arc<LogDispatcher>) {
    let mut handles = Vec::new();
    for worker in 0..WORKERS {
        let dispatcher = Arc::clone(dispatcher);
        handles.push(thread::spawn(move || {
            for message in 0..MESSAGES_PER_WORKER {
                dispatcher
                    .info("worker {} message {}", &[&worker, &message])
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_callers_produce_exactly_n_times_m_intact_lines() {
    let dispatcher = Arc::new(LogDispatcher::new());
    let records = Arc::new(Mutex::new(Vec::new()));
    dispatcher.add_adapter(Box::new(RecordingSink(Arc::clone(&records))));

    spawn_workers(&dispatcher);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), WORKERS * MESSAGES_PER_WORKER);

    let mut expected = HashSet::new();
    for worker in 0..WORKERS {
        for message in 0..MESSAGES_PER_WORKER {
            expected.insert(format!("worker {worker} message {message}"));
        }
    }
    let seen: HashSet<String> = records.iter().cloned().collect();
    assert_eq!(seen, expected, "every line arrives exactly once, untorn");
}

#[test]
fn test_all_sinks_observe_the_same_global_order() {
    let dispatcher = Arc::new(LogDispatcher::new());
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    dispatcher.add_adapter(Box::new(RecordingSink(Arc::clone(&first))));
    dispatcher.add_adapter(Box::new(RecordingSink(Arc::clone(&second))));

    spawn_workers(&dispatcher);

    let first = first.lock().unwrap();
    let second = second.lock().unwrap();
    assert_eq!(first.len(), WORKERS * MESSAGES_PER_WORKER);
    assert_eq!(*first, *second, "sinks must see one consistent order");
}

#[test]
fn test_shared_stream_lines_are_never_interleaved() {
    let dispatcher = Arc::new(LogDispatcher::new());
    let stream = Arc::new(Mutex::new(String::new()));
    // Two sinks on the same stream double the interleaving surface.
    dispatcher.add_adapter(Box::new(SharedStreamSink(Arc::clone(&stream))));
    dispatcher.add_adapter(Box::new(SharedStreamSink(Arc::clone(&stream))));

    spawn_workers(&dispatcher);

    let stream = stream.lock().unwrap();
    let lines: Vec<&str> = stream.lines().collect();
    assert_eq!(lines.len(), WORKERS * MESSAGES_PER_WORKER * 2);
    for line in lines {
        assert!(
            line.starts_with("worker ") && line.contains(" message "),
            "torn line observed: {line:?}"
        );
    }
}

#[test]
fn test_registration_and_clearing_race_with_dispatch() {
    let dispatcher = Arc::new(LogDispatcher::new());
    let records = Arc::new(Mutex::new(Vec::new()));
    dispatcher.add_adapter(Box::new(RecordingSink(Arc::clone(&records))));

    let logger = {
        let dispatcher = Arc::clone(&dispatcher);
        thread::spawn(move || {
            for message in 0..MESSAGES_PER_WORKER {
                dispatcher.info("message {}", &[&message]).unwrap();
            }
        })
    };
    let clearer = {
        let dispatcher = Arc::clone(&dispatcher);
        thread::spawn(move || {
            dispatcher.clear_adapters();
        })
    };
    logger.join().unwrap();
    clearer.join().unwrap();

    // However the race resolves, every recorded line must be intact and
    // no line may appear after the clear took effect mid-call.
    let records = records.lock().unwrap();
    assert!(records.len() <= MESSAGES_PER_WORKER);
    for (index, text) in records.iter().enumerate() {
        assert_eq!(text, &format!("message {index}"));
    }
}
