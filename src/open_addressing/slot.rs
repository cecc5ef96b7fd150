use core::mem;

pub(crate) struct Entry<K, V> {
    pub key: K,
    pub val: V,
}

/// One cell of the table.
///
/// A `Tombstone` holds nothing but is not `Empty`: probes walk past it, which
/// keeps keys that were placed beyond it reachable.
pub(crate) enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied(Entry<K, V>),
}

impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// `Empty` or `Tombstone`: somewhere a new entry may go.
    pub fn is_free(&self) -> bool {
        !matches!(self, Slot::Occupied(_))
    }

    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut Entry<K, V>> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    /// Turns an occupied slot into a tombstone and hands back what it held.
    pub fn bury(&mut self) -> Option<Entry<K, V>> {
        match mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(e) => Some(e),
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn into_entry(self) -> Option<Entry<K, V>> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }
}
