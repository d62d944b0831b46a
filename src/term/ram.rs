use crate::lang::Integer;
use crate::mach::Memory;
use std::convert::TryFrom;

/// Size of the address space behind `PEEK` and `POKE`.
pub const RAM_SIZE: usize = 65536;

/// ## Byte addressed RAM
///
/// Addresses outside `0..RAM_SIZE` read as nothing and ignore writes.
/// Poked values keep only their low byte.

#[derive(Clone)]
pub struct Ram {
    bytes: Box<[u8]>,
}

impl Default for Ram {
    fn default() -> Self {
        Ram {
            bytes: vec![0; RAM_SIZE].into_boxed_slice(),
        }
    }
}

impl Ram {
    pub fn new() -> Ram {
        Ram::default()
    }

    fn cell(address: Integer) -> Option<usize> {
        usize::try_from(address).ok().filter(|a| *a < RAM_SIZE)
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ram {{ {} bytes }}", self.bytes.len())
    }
}

impl Memory for Ram {
    fn peek(&mut self, address: Integer) -> Option<Integer> {
        Ram::cell(address).map(|a| Integer::from(self.bytes[a]))
    }

    fn poke(&mut self, address: Integer, value: Integer) {
        if let Some(a) = Ram::cell(address) {
            self.bytes[a] = (value & 0xFF) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_byte_is_kept() {
        let mut ram = Ram::new();
        ram.poke(1000, 0x1234);
        assert_eq!(ram.peek(1000), Some(0x34));
        ram.poke(1001, -1);
        assert_eq!(ram.peek(1001), Some(255));
    }

    #[test]
    fn test_out_of_range() {
        let mut ram = Ram::new();
        ram.poke(65536, 7);
        ram.poke(-1, 7);
        assert_eq!(ram.peek(65535), Some(0));
        assert_eq!(ram.peek(65536), None);
        assert_eq!(ram.peek(-1), None);
    }
}
