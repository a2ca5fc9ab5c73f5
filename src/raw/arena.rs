use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use super::handle::Handle;
use crate::Error;

/// Slot storage for tree nodes. Freed slots are recycled before the arena grows.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
    #[cfg(test)]
    fail_next_growth: bool,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            #[cfg(test)]
            fail_next_growth: false,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    /// Stores `element`, reusing a freed slot when one exists.
    ///
    /// Growing the slot vector is fallible; on failure the arena is unchanged and
    /// `element` is dropped.
    pub(crate) fn try_alloc(&mut self, element: T) -> Result<Handle, Error> {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.slot()] = Some(element);
            return Ok(handle);
        }

        if self.slots.len() >= Handle::MAX {
            return Err(Error::CapacityExhausted { max_nodes: Handle::MAX });
        }
        self.grow()?;
        // The free list must be able to take this slot back without allocating.
        self.free.try_reserve(self.slots.len() + 1 - self.free.len())?;

        self.slots.push(Some(element));
        Ok(Handle::from_slot(self.slots.len() - 1))
    }

    fn grow(&mut self) -> Result<(), TryReserveError> {
        #[cfg(test)]
        if core::mem::take(&mut self.fail_next_growth) {
            return Err(simulated_failure());
        }
        self.slots.try_reserve(1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.slot()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.slot()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.slot()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
impl<T> Arena<T> {
    /// Makes the next growth of the slot vector report an allocation failure.
    pub(crate) fn fail_next_growth(&mut self) {
        self.fail_next_growth = true;
    }
}

#[cfg(test)]
pub(crate) fn simulated_failure() -> TryReserveError {
    // Asking for more than `isize::MAX` bytes is a guaranteed capacity overflow.
    Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn freed_slots_are_reused() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.try_alloc(1).unwrap();
        let b = arena.try_alloc(2).unwrap();
        assert_eq!(arena.take(a), 1);
        let c = arena.try_alloc(3).unwrap();
        assert_eq!(a, c);
        assert_eq!(*arena.get(b), 2);
        assert_eq!(*arena.get(c), 3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn failed_growth_leaves_arena_untouched() {
        let mut arena: Arena<u32> = Arena::new();
        let a = arena.try_alloc(7).unwrap();
        arena.fail_next_growth();
        assert!(matches!(arena.try_alloc(8), Err(Error::AllocationFailed(_))));
        assert_eq!(arena.len(), 1);
        assert_eq!(*arena.get(a), 7);
        // Only one growth is failed.
        assert!(arena.try_alloc(9).is_ok());
    }

    #[test]
    fn growth_stops_at_handle_limit() {
        let mut arena: Arena<()> = Arena::new();
        for _ in 0..Handle::MAX {
            arena.try_alloc(()).unwrap();
        }
        assert!(matches!(arena.try_alloc(()), Err(Error::CapacityExhausted { .. })));
        assert_eq!(arena.len(), Handle::MAX);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Alloc(value) => {
                        let handle = arena.try_alloc(value).unwrap();
                        model.push((handle, value));
                    }
                    Operation::GetMut(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.get_mut(model[index].0) = value;
                        model[index].1 = value;
                    }
                    Operation::Take(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (handle, expected) = model.swap_remove(index);
                        prop_assert_eq!(arena.take(handle), expected);
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                for &(handle, value) in &model {
                    prop_assert_eq!(*arena.get(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Alloc(u32),
        GetMut(usize, u32),
        Take(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => any::<u32>().prop_map(Operation::Alloc),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::GetMut(which, value)),
            8 => any::<usize>().prop_map(Operation::Take),
            1 => Just(Operation::Clear),
        ]
    }
}
