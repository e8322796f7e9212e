use crate::traits::{OutputSequence, Sequence};

use super::indexed::indexed_capabilities;

// A borrowed slice yields references that live as long as the slice.
impl<'s, T> Sequence for &'s [T] {
    type Position = usize;
    type Sentinel = usize;
    type Item = &'s T;
    type Difference = isize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn sentinel(&self) -> usize {
        self.len()
    }

    #[inline]
    fn reached(&self, position: &usize, sentinel: &usize) -> bool {
        position == sentinel
    }

    #[inline]
    fn next(&self, position: &mut usize) {
        debug_assert!(*position < self.len(), "stepped past the end of a slice");
        *position += 1;
    }

    #[inline]
    fn read(&self, position: &usize) -> &'s T {
        let slice: &'s [T] = *self;
        &slice[*position]
    }
}

indexed_capabilities!(impl['s, T] for &'s [T]);

// A mutably borrowed slice can't hand out references that outlive the call,
// so it yields clones and accepts writes.
impl<T> Sequence for &mut [T]
where
    T: Clone,
{
    type Position = usize;
    type Sentinel = usize;
    type Item = T;
    type Difference = isize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn sentinel(&self) -> usize {
        self.len()
    }

    #[inline]
    fn reached(&self, position: &usize, sentinel: &usize) -> bool {
        position == sentinel
    }

    #[inline]
    fn next(&self, position: &mut usize) {
        debug_assert!(*position < self.len(), "stepped past the end of a slice");
        *position += 1;
    }

    #[inline]
    fn read(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

indexed_capabilities!(impl['s, T] for &'s mut [T] where T: Clone);

impl<T> OutputSequence<T> for &mut [T]
where
    T: Clone,
{
    #[inline]
    fn write(&mut self, position: &usize, value: T) {
        self[*position] = value;
    }
}
