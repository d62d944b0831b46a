use crate::lang::{Ident, Integer};

/// ## Variable memory
///
/// One cell per letter. Every variable exists from the start
/// with a value of zero.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: [Integer; Ident::COUNT],
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars = [0; Ident::COUNT];
    }

    pub fn fetch(&self, ident: Ident) -> Integer {
        self.vars[ident.index()]
    }

    pub fn store(&mut self, ident: Ident, value: Integer) {
        self.vars[ident.index()] = value;
    }
}
