/// Configuration for a [`StagingBuffer`](crate::StagingBuffer).
///
/// With the `serde` feature enabled this type deserializes with every field
/// optional, so a host application can embed it in its own configuration
/// file and override only what it needs.
///
/// # Default
///
/// 16 KiB initial region, 16 KiB reads, doubling growth. The first
/// [`fill_from`](crate::StagingBuffer::fill_from) on an empty default buffer
/// fits in the initial region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct BufferOptions {
    /// Size in bytes of the region allocated up front.
    ///
    /// A zero capacity is accepted; the first append then takes the growth
    /// path.
    ///
    /// # Default
    ///
    /// `16384`
    pub initial_capacity: usize,

    /// Number of bytes requested from the reader on each
    /// [`fill_from`](crate::StagingBuffer::fill_from) call.
    ///
    /// Keep this at or below `initial_capacity`, otherwise the first fill
    /// reallocates.
    ///
    /// # Default
    ///
    /// `16384`
    pub read_size: usize,

    /// How the region grows when neither the tail nor compaction can make
    /// room.
    ///
    /// # Default
    ///
    /// [`GrowthPolicy::Doubling`]
    pub growth: GrowthPolicy,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 16 * 1024,
            read_size: 16 * 1024,
            growth: GrowthPolicy::default(),
        }
    }
}

/// Sizing rule applied when the region must be reallocated.
///
/// Every policy grows geometrically, so a stream of appends totalling `n`
/// bytes triggers `O(log n)` reallocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum GrowthPolicy {
    /// New capacity is `capacity * 2 + needed`.
    #[default]
    Doubling,
    /// New capacity is `capacity * factor + needed`.
    ///
    /// Factors below 2 are treated as 2.
    Factor(u8),
}

impl GrowthPolicy {
    /// Capacity of the replacement region, or `None` on arithmetic overflow.
    ///
    /// `needed` is the size of the incoming write. Since the unread data never
    /// exceeds `capacity`, the result always holds both.
    pub(crate) fn next_capacity(self, capacity: usize, needed: usize) -> Option<usize> {
        let factor = match self {
            GrowthPolicy::Doubling => 2,
            GrowthPolicy::Factor(n) => usize::from(n.max(2)),
        };
        capacity.checked_mul(factor)?.checked_add(needed)
    }
}
