//! DST: `BoundedStack` against a `Vec` model, with history-based LIFO checks.

mod common;

use vc_containers::BoundedStack;
use vc_core::{ContainerError, StackHistory, StackPropertyChecker};
use vc_dst::{DstEnv, OpKind, WorkloadConfig};

const CAPACITY: usize = 8;

struct Driver {
    stack: BoundedStack<i64>,
    model: Vec<i64>,
    history: StackHistory<i64>,
    records: u64,
}

impl Driver {
    fn new() -> Self {
        Self {
            stack: BoundedStack::with_capacity(CAPACITY),
            model: Vec::new(),
            history: StackHistory::new(),
            records: 0,
        }
    }

    fn next_record(&mut self) -> u64 {
        self.records += 1;
        self.records
    }

    fn push(&mut self, value: i64) {
        let result = self.stack.push(value);
        let step = self.next_record();

        if self.model.len() < CAPACITY {
            assert_eq!(result, Ok(()));
            self.model.push(value);
            self.history.record_push(value, true, step);
        } else {
            assert_eq!(
                result,
                Err(ContainerError::CapacityExceeded { capacity: CAPACITY })
            );
            self.history.record_push(value, false, step);
        }
    }

    fn pop(&mut self) {
        let result = self.stack.pop();
        let step = self.next_record();

        match self.model.pop() {
            Some(expected) => assert_eq!(result, Ok(expected)),
            None => assert_eq!(result, Err(ContainerError::Empty)),
        }
        self.history.record_pop(result.ok(), step);
    }

    fn clear(&mut self) {
        self.stack.clear();
        self.model.clear();
        let step = self.next_record();
        self.history.record_clear(step);
    }
}

fn run(seed: u64, config: WorkloadConfig) {
    let mut env = DstEnv::with_workload(seed, config);
    let mut driver = Driver::new();

    for op in env.workload() {
        match (op.kind, op.invalid) {
            (OpKind::Insert, false) => driver.push(op.value),
            // Fill up, then one push that must be rejected.
            (OpKind::Insert, true) => {
                while driver.model.len() < CAPACITY {
                    driver.push(op.value);
                }
                driver.push(op.value);
            }
            (OpKind::Remove, false) => driver.pop(),
            // Drain, then one pop that must fail.
            (OpKind::Remove, true) => {
                while !driver.model.is_empty() {
                    driver.pop();
                }
                driver.pop();
            }
            (OpKind::Query, false) => {
                assert_eq!(driver.stack.peek().ok(), driver.model.last());
                assert_eq!(driver.stack.is_full(), driver.model.len() == CAPACITY);
            }
            (OpKind::Query, true) => driver.clear(),
        }

        assert_eq!(
            driver.stack.as_slice(),
            driver.model.as_slice(),
            "DST_SEED={} step {}",
            seed,
            op.step
        );
        let checker = StackPropertyChecker::new(&driver.stack)
            .with_history(&driver.history)
            .with_seed(seed);
        common::assert_properties(&checker, seed, op.step);
    }
}

#[test]
fn test_dst_stack_default_workload() {
    common::for_each_seed(|seed| run(seed, WorkloadConfig::default()));
}

#[test]
fn test_dst_stack_churn() {
    common::for_each_seed(|seed| run(seed, WorkloadConfig::churn()));
}

#[test]
fn test_dst_stack_insert_heavy_stays_bounded() {
    common::for_each_seed(|seed| {
        let mut env = DstEnv::with_workload(seed, WorkloadConfig::insert_heavy());
        let mut stack = BoundedStack::with_capacity(CAPACITY);

        for op in env.workload() {
            if op.kind == OpKind::Insert {
                let _ = stack.push(op.value);
            }
            assert!(stack.len() <= CAPACITY, "DST_SEED={}", seed);
        }
    });
}

#[test]
fn test_dst_stack_same_seed_same_run() {
    let collect = |seed| {
        let mut env = DstEnv::with_workload(seed, WorkloadConfig::default());
        let mut stack = BoundedStack::with_capacity(CAPACITY);
        let mut popped = Vec::new();
        for op in env.workload() {
            match op.kind {
                OpKind::Insert => {
                    let _ = stack.push(op.value);
                }
                _ => popped.extend(stack.pop().ok()),
            }
        }
        popped
    };

    assert_eq!(collect(4242), collect(4242));
}
