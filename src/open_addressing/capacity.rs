/// Table sizes, roughly doubling. Each is prime (or close to it) so quadratic
/// probe sequences spread across the whole array instead of cycling early.
pub(crate) static CAPACITIES: [usize; 31] = [
    2, 5, 11, 23, 47, 97, 197, 397, 797, 1597, 3203, 6421, 12853, 25717, 51437, 102877, 205759,
    411527, 823117, 1646237, 3292489, 6584983, 13169977, 26339969, 52679969, 105359939, 210719881,
    421439783, 842879579, 1685759167, 2147483647,
];

/// Position in [`CAPACITIES`]. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct CapacityIndex(usize);

impl CapacityIndex {
    pub(crate) const FIRST: Self = Self(0);

    /// smallest schedule entry that can hold `min` slots, or the last entry if none can
    pub(crate) fn at_least(min: usize) -> Self {
        let index = CAPACITIES
            .iter()
            .position(|&c| c >= min)
            .unwrap_or(CAPACITIES.len() - 1);
        Self(index)
    }

    pub(crate) fn capacity(self) -> usize {
        CAPACITIES[self.0]
    }

    /// `None` once the schedule is exhausted.
    pub(crate) fn next(self) -> Option<Self> {
        if self.0 + 1 < CAPACITIES.len() {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_strictly_ascending() {
        assert!(CAPACITIES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn at_least_rounds_up() {
        assert_eq!(CapacityIndex::at_least(0).capacity(), 2);
        assert_eq!(CapacityIndex::at_least(2).capacity(), 2);
        assert_eq!(CapacityIndex::at_least(3).capacity(), 5);
        assert_eq!(CapacityIndex::at_least(1000).capacity(), 1597);
        assert_eq!(CapacityIndex::at_least(usize::MAX).capacity(), 2147483647);
    }

    #[test]
    fn next_stops_at_the_end() {
        let mut index = CapacityIndex::FIRST;
        let mut steps = 0;
        while let Some(next) = index.next() {
            assert!(next > index);
            index = next;
            steps += 1;
        }
        assert_eq!(steps, CAPACITIES.len() - 1);
        assert_eq!(index.capacity(), 2147483647);
    }
}
