// Used by Token and by the variable store

use std::convert::TryFrom;

/// A variable name: one lowercase ASCII letter.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Ident(u8);

impl Ident {
    pub const COUNT: usize = 26;

    pub fn from_index(index: usize) -> Option<Ident> {
        if index < Self::COUNT {
            Some(Ident(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<char> for Ident {
    type Error = ();
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_lowercase() {
            Ok(Ident(ch as u8 - b'a'))
        } else {
            Err(())
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(b'a' + self.0))
    }
}
