//! Splitting input into batches and batches into waves

/// A contiguous slice of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    /// 1-based position of the batch in the run
    pub number: usize,
    /// Items in input order
    pub items: Vec<T>,
}

impl<T> Batch<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `items` into consecutive groups of at most `size` elements.
///
/// `size` must be non-zero.
pub(crate) fn chunk_owned<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    debug_assert!(size > 0);
    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter().peekable();
    while iter.peek().is_some() {
        chunks.push(iter.by_ref().take(size).collect());
    }
    chunks
}

/// Partition items into numbered batches of `batch_size`, the last one
/// possibly shorter.
pub fn partition<T>(items: Vec<T>, batch_size: usize) -> Vec<Batch<T>> {
    chunk_owned(items, batch_size)
        .into_iter()
        .enumerate()
        .map(|(index, items)| Batch {
            number: index + 1,
            items,
        })
        .collect()
}

/// Group batches into waves of at most `max_concurrent` batches
pub fn waves<T>(batches: Vec<Batch<T>>, max_concurrent: usize) -> Vec<Vec<Batch<T>>> {
    chunk_owned(batches, max_concurrent)
}
