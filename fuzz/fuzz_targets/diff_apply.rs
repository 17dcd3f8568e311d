#![no_main]

use aislar::delta::{apply, coalesce_replacements, diff, order_by};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte splits the input into base and target
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (base, target) = rest.split_at((split as usize).min(rest.len()));

    let script = diff(base, target);
    assert_eq!(apply(base, target, &script).ok().as_deref(), Some(target));
    assert_eq!(apply(base, target, &[]).ok().as_deref(), Some(base));

    let coalesced = coalesce_replacements(&script);
    assert_eq!(apply(base, target, &coalesced).ok().as_deref(), Some(target));

    // Every other delta, back in canonical order: must apply without panicking
    let mut odd: Vec<_> = script.iter().skip(1).step_by(2).copied().collect();
    odd.reverse();
    let _ = apply(base, target, &order_by(&odd, &script));
});
