/// Splits a raw unit count into full cases and leftover units.
///
/// Integer arithmetic keeps the decomposition exact. The float route
/// (divide, strip the whole part, re-scale the fraction) loses precision on
/// repeating decimals - 4/12 re-scaled lands a hair under 4 and truncates
/// to 3 without an epsilon nudge. `div`/`rem` has no such failure mode and
/// `case_count * unit + remainder == raw_units` holds for every input.
pub(super) fn split_units(raw_units: u64, unit: u32) -> (u64, u64) {
    debug_assert!(unit > 0, "category unit must be positive");
    let unit = u64::from(unit);

    (raw_units / unit, raw_units % unit)
}
