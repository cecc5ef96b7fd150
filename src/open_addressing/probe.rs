use core::marker::PhantomData;

/// Collision resolution strategy. `offset(i)` is added to the initial hash
/// on the `i`th probe; step 0 must always be offset 0.
pub trait Probe {
    const NAME: &'static str;
    fn offset(step: usize, capacity: usize) -> usize;
}

/// `(h0 + i^2) mod capacity`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quadratic;

/// `(h0 + i) mod capacity`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Probe for Quadratic {
    const NAME: &'static str = "quadratic";

    fn offset(step: usize, capacity: usize) -> usize {
        // step < capacity <= i32::MAX, so the square fits in a u64
        let step = step as u64;
        ((step * step) % capacity as u64) as usize
    }
}

impl Probe for Linear {
    const NAME: &'static str = "linear";

    fn offset(step: usize, capacity: usize) -> usize {
        step % capacity
    }
}

/// The slot indices tried for one key, at most `capacity` of them.
pub(crate) struct ProbeSeq<P> {
    start: usize,
    capacity: usize,
    step: usize,
    marker: PhantomData<P>,
}

impl<P: Probe> ProbeSeq<P> {
    pub(crate) fn new(start: usize, capacity: usize) -> Self {
        debug_assert!(start < capacity);
        Self {
            start,
            capacity,
            step: 0,
            marker: PhantomData,
        }
    }
}

impl<P: Probe> Iterator for ProbeSeq<P> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }
        let offset = P::offset(self.step, self.capacity);
        self.step += 1;
        // both terms are below capacity, so the sum cannot overflow
        let index = self.start + offset;
        Some(if index >= self.capacity {
            index - self.capacity
        } else {
            index
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.capacity - self.step;
        (rem, Some(rem))
    }
}

impl<P: Probe> ExactSizeIterator for ProbeSeq<P> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_walks_every_slot_once() {
        let seq: Vec<usize> = ProbeSeq::<Linear>::new(3, 5).collect();
        assert_eq!(seq, vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn quadratic_squares_the_step() {
        let seq: Vec<usize> = ProbeSeq::<Quadratic>::new(2, 11).take(5).collect();
        // 2 + 0, 2 + 1, 2 + 4, 2 + 9, (2 + 16) % 11
        assert_eq!(seq, vec![2, 3, 6, 0, 7]);
    }

    #[test]
    fn quadratic_covers_half_of_a_prime_table() {
        let mut seen: Vec<usize> = ProbeSeq::<Quadratic>::new(0, 23).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), (23 + 1) / 2);
    }

    #[test]
    fn no_overflow_at_largest_capacity() {
        let capacity = 2147483647;
        let offset = Quadratic::offset(capacity - 1, capacity);
        // (c - 1)^2 = 1 (mod c)
        assert_eq!(offset, 1);
        let mut seq = ProbeSeq::<Quadratic>::new(capacity - 1, capacity);
        assert_eq!(seq.next(), Some(capacity - 1));
        assert_eq!(seq.next(), Some(0));
    }
}
