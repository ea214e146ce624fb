pub struct IndexedIter<I, Idx> {
    inner: std::iter::Enumerate<I>,
    _marker: std::marker::PhantomData<Idx>,
}

/// `enumerate()` yielding a typed index (`RideIdx`, `CarIdx`) instead of a bare `usize`.
pub trait EnumerateIdx<Idx>: Iterator + Sized {
    fn enumerate_idx(self) -> IndexedIter<Self, Idx> {
        IndexedIter {
            inner: self.enumerate(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<I: Iterator, Idx> EnumerateIdx<Idx> for I {}

impl<I: Iterator, Idx: From<usize>> Iterator for IndexedIter<I, Idx> {
    type Item = (Idx, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(i, item)| (Idx::from(i), item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::ride::RideIdx;

    use super::*;

    #[test]
    fn test_enumerate_idx() {
        let items = ["a", "b", "c"];
        let indexed: Vec<(RideIdx, &&str)> = items.iter().enumerate_idx().collect();

        assert_eq!(indexed[0], (RideIdx::new(0), &"a"));
        assert_eq!(indexed[2], (RideIdx::new(2), &"c"));
    }
}
