use crate::traits::{OutputSequence, Sequence};

use super::indexed::indexed_capabilities;

// An owned vector yields clones of its elements.
impl<T> Sequence for Vec<T>
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
        debug_assert!(*position < self.len(), "stepped past the end of a vector");
        *position += 1;
    }

    #[inline]
    fn read(&self, position: &usize) -> T {
        self[*position].clone()
    }
}

indexed_capabilities!(impl[T] for Vec<T> where T: Clone);

impl<T> OutputSequence<T> for Vec<T>
where
    T: Clone,
{
    #[inline]
    fn write(&mut self, position: &usize, value: T) {
        self[*position] = value;
    }
}

#[cfg(test)]
mod tests {
    use crate::traits::{BoundedSequence, RandomAccessSequence, SizedSequence};

    use super::*;

    #[test]
    fn test_vec_reads_clones() {
        let v = vec![String::from("a"), String::from("b")];
        let mut position = v.begin();
        v.next(&mut position);
        assert_eq!(v.read(&position), "b");
        assert_eq!(v.size(), 2);
    }

    #[test]
    fn test_vec_advance_to_end() {
        let v = vec![1, 2, 3];
        let mut position = v.begin();
        v.advance(&mut position, 3);
        assert_eq!(position, v.end());
        assert!(v.is_end(&position));
    }

    #[test]
    fn test_vec_write() {
        let mut v = vec![1, 2, 3];
        v.write(&2, 9);
        assert_eq!(v, vec![1, 2, 9]);
    }
}
