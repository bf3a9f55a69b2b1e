use core::iter::FusedIterator;

/// Flattens an iterator of sub-iterators, keeping the current sub-iterator
/// around so that the remaining length can be inspected.
pub struct Flatten<I, Sub> {
    iter: I,
    sub: Option<Sub>,
}

impl<I, Sub> Flatten<I, Sub> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            sub: None,
        }
    }
}

impl<I, Sub> Flatten<I, Sub>
where
    I: Iterator<Item = Sub>,
    Sub: ExactSizeIterator,
{
    /// Size hint for when every sub-iterator not yet produced by `iter`
    /// yields exactly `per_item` elements.
    pub fn uniform_size_hint(&self, per_item: usize) -> (usize, Option<usize>) {
        let pending = self.sub.as_ref().map_or(0, ExactSizeIterator::len);
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_mul(per_item).saturating_add(pending),
            upper
                .and_then(|n| n.checked_mul(per_item))
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I, Sub: Iterator> Iterator for Flatten<I, Sub>
where
    I: Iterator<Item = Sub>,
{
    type Item = Sub::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sub) = &mut self.sub {
            if let Some(item) = sub.next() {
                return Some(item);
            }
        }
        for mut sub in &mut self.iter {
            if let Some(item) = sub.next() {
                self.sub = Some(sub);
                return Some(item);
            }
        }
        self.sub = None;
        None
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let init = match self.sub {
            Some(sub) => sub.fold(init, &mut f),
            None => init,
        };
        self.iter.fold(init, |b, item| item.fold(b, &mut f))
    }
}

impl<I, Sub: Iterator> FusedIterator for Flatten<I, Sub> where
    I: FusedIterator<Item = Sub>
{
}

/// Number of fixed-size chunks needed for `len` items after `pad` items of
/// leading padding.
pub fn chunk_count(len: usize, pad: usize, chunk: usize) -> Option<usize> {
    len.checked_add(pad)?
        .checked_add(chunk - 1)
        .map(|n| n / chunk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_tracks_pending() {
        let chunks = [[1, 2, 3], [4, 5, 6]].into_iter().map(|a| a.into_iter());
        let mut flat = Flatten::new(chunks);
        assert_eq!(flat.uniform_size_hint(3), (6, Some(6)));
        assert_eq!(flat.next(), Some(1));
        assert_eq!(flat.uniform_size_hint(3), (5, Some(5)));
        assert_eq!(flat.by_ref().fold(0, |sum, n| sum + n), 20);
    }

    #[test]
    fn flatten_fold_keeps_current_sub() {
        let chunks = [[1, 2], [3, 4]].into_iter().map(|a| a.into_iter());
        let mut flat = Flatten::new(chunks);
        assert_eq!(flat.next(), Some(1));
        assert_eq!(flat.fold(0, |sum, n| sum * 10 + n), 234);
    }

    #[test]
    fn chunk_counts() {
        assert_eq!(chunk_count(0, 0, 5), Some(0));
        assert_eq!(chunk_count(1, 4, 5), Some(1));
        assert_eq!(chunk_count(6, 4, 5), Some(2));
        assert_eq!(chunk_count(10, 0, 5), Some(2));
        assert_eq!(chunk_count(usize::MAX, 1, 5), None);
    }
}
