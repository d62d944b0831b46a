use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited array
///
/// Storage is inline; pushing never allocates. A push onto a full
/// stack is refused with an `OUT OF MEMORY` error carrying the
/// overflow message given at construction.

pub struct Stack<T, const N: usize> {
    overflow_message: &'static str,
    items: [T; N],
    len: usize,
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for Stack<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &self.items[..self.len])
    }
}

impl<T: Copy + Default, const N: usize> Stack<T, N> {
    pub fn new(overflow_message: &'static str) -> Stack<T, N> {
        Stack {
            overflow_message,
            items: [T::default(); N],
            len: 0,
        }
    }
    pub fn capacity(&self) -> usize {
        N
    }
    pub fn clear(&mut self) {
        self.len = 0;
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len >= N
    }
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).map(|idx| &self.items[idx])
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items[..self.len].get(idx)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.items[self.len] = val;
        self.len += 1;
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.items[self.len])
        }
    }
}
