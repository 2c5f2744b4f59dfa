//! Helpers shared by the DST test binaries.

#![allow(dead_code)]

use vc_core::PropertyChecker;

/// Run `run` once per iteration, each with its own non-zero seed derived
/// from the base seed (`DST_SEED` or random).
pub fn for_each_seed(mut run: impl FnMut(u64)) {
    let base = vc_dst::get_or_generate_seed();
    let iterations = vc_dst::iterations_from_env();

    for i in 0..iterations {
        let seed = base.wrapping_add(i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).max(1);
        run(seed);
    }
}

/// Panic with the full property report if any property fails.
pub fn assert_properties(checker: &impl PropertyChecker, seed: u64, step: u64) {
    if checker.verify_all().is_err() {
        panic!(
            "property violated at step {} (DST_SEED={})\n{}",
            step,
            seed,
            checker.summary().format_report()
        );
    }
}
