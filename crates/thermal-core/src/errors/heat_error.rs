/// Heat-range bookkeeping errors.
#[derive(Debug, thiserror::Error)]
pub enum HeatError {
    /// Offsets must satisfy 0 <= start <= end <= len (in characters).
    #[error("heat range ({start}, {end}) out of bounds for content of {len} chars")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}
