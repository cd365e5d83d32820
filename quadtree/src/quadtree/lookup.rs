//! Process-wide constants shared read-only by every tree instance.

/// Bounded by the width of the morton lookup table: 8 bits per axis.
pub(crate) const MAX_SUPPORTED_DEPTH: usize = 8;

/// `MORTON_LOOKUP[b]` is byte `b` with its bits spread onto the even bit
/// positions. Two spread coordinates interleave as `x | (y << 1)`.
pub(crate) const MORTON_LOOKUP: [u16; 256] = morton_lookup();

/// Cumulative node count of a complete quaternary tree: index `d` holds the
/// number of slots shallower than depth `d`. Sizes the flat tables
/// (`DEPTH_SIZE_LOOKUP[max_depth + 1]` slots) and strides the addressing.
pub(crate) const DEPTH_SIZE_LOOKUP: [usize; MAX_SUPPORTED_DEPTH + 2] = depth_size_lookup();

/// Discrete coordinate buckets per axis at depth `d`, i.e. `2^d`.
pub(crate) const DEPTH_SCALE_LOOKUP: [u32; MAX_SUPPORTED_DEPTH + 1] = depth_scale_lookup();

const fn morton_lookup() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut value = 0;
    while value < 256 {
        let mut spread = 0u16;
        let mut bit = 0;
        while bit < 8 {
            spread |= (((value >> bit) & 1) as u16) << (bit * 2);
            bit += 1;
        }
        table[value] = spread;
        value += 1;
    }
    table
}

const fn depth_size_lookup() -> [usize; MAX_SUPPORTED_DEPTH + 2] {
    let mut table = [0; MAX_SUPPORTED_DEPTH + 2];
    let mut depth = 1;
    while depth < table.len() {
        table[depth] = table[depth - 1] + (1 << (2 * (depth - 1)));
        depth += 1;
    }
    table
}

const fn depth_scale_lookup() -> [u32; MAX_SUPPORTED_DEPTH + 1] {
    let mut table = [0; MAX_SUPPORTED_DEPTH + 1];
    let mut depth = 0;
    while depth < table.len() {
        table[depth] = 1 << depth;
        depth += 1;
    }
    table
}
