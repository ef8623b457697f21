//! Range to CIDR decomposition.
//!
//! Tiles an arbitrary address range with the minimal ordered set of
//! aligned CIDR blocks.

/// Decompose the range `[start, start + remaining)` into the minimal
/// ordered list of `(base, prefix)` CIDR blocks that exactly cover it.
///
/// Each emitted block is the largest possible, constrained by:
/// 1. The span still to cover - the block may not be larger than `remaining`
/// 2. The base alignment - `base` must be a valid network address for the
///    block size (its trailing zero bits bound the size)
///
/// Whichever constraint yields the smaller block binds. The result is at
/// most `2 * bits` blocks regardless of the size of the range; the loop
/// never steps per address.
///
/// `bits` is the address space width (32 or 128) and `remaining == 0`
/// yields no blocks. A range reaching outside the address space is a
/// caller bug, not an input error.
pub fn decompose_range(start: u128, remaining: u128, bits: u8) -> Vec<(u128, u8)> {
    assert!(
        bits == 32 || bits == 128,
        "bits[{bits}] is not an address space width, should never happen."
    );
    if remaining == 0 {
        return Vec::new();
    }
    let space_last = if bits == 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    };
    assert!(
        start <= space_last && remaining - 1 <= space_last - start,
        "range at {start} len {remaining} leaves the {bits}-bit space, should never happen."
    );

    let mut blocks = Vec::new();
    let mut base = start;
    let mut remaining = remaining;
    while remaining > 0 {
        let fit = remaining.ilog2();
        let align = if base == 0 {
            u32::from(bits)
        } else {
            base.trailing_zeros()
        };
        let k = fit.min(align);
        blocks.push((base, bits - k as u8));
        let size = 1u128 << k;
        base = base.wrapping_add(size);
        remaining -= size;
    }
    blocks
}
