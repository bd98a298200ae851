//! Bounded top-k selection by frequency.

/// Keeps the `limit` highest-frequency items seen so far, best first.
///
/// An item only displaces a kept one when its frequency is strictly
/// greater, so among equal frequencies the earlier item wins.
pub(crate) struct TopK<T> {
    limit: usize,
    best: Vec<(i64, T)>,
}

impl<T> TopK<T> {
    /// Cap on the up-front allocation; `limit` may be as large as `usize::MAX`.
    const MAX_PREALLOC: usize = 16;

    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            best: Vec::with_capacity(limit.min(Self::MAX_PREALLOC)),
        }
    }

    pub(crate) fn offer(&mut self, frequency: i64, item: T) {
        if self.limit == 0 {
            return;
        }
        if self.best.len() == self.limit {
            match self.best.last() {
                Some(&(worst, _)) if frequency > worst => {
                    self.best.pop();
                }
                _ => return,
            }
        }
        let at = self.best.partition_point(|&(f, _)| f >= frequency);
        self.best.insert(at, (frequency, item));
    }

    pub(crate) fn into_sorted_vec(self) -> Vec<(i64, T)> {
        self.best
    }
}

impl<T> Extend<(i64, T)> for TopK<T> {
    fn extend<I: IntoIterator<Item = (i64, T)>>(&mut self, iter: I) {
        for (frequency, item) in iter {
            self.offer(frequency, item);
        }
    }
}
