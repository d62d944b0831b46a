use crate::lang::Integer;

/// Receives everything `PRINT` emits. Nothing is buffered by the runtime.
pub trait Console {
    fn print_text(&mut self, s: &str);
    fn print_number(&mut self, n: Integer);
}

impl Console for String {
    fn print_text(&mut self, s: &str) {
        self.push_str(s);
    }
    fn print_number(&mut self, n: Integer) {
        self.push_str(&n.to_string());
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn print_text(&mut self, s: &str) {
        (**self).print_text(s)
    }
    fn print_number(&mut self, n: Integer) {
        (**self).print_number(n)
    }
}

/// Host address space reached by `PEEK` and `POKE`.
///
/// `peek` returning `None` leaves the target variable untouched.
pub trait Memory {
    fn peek(&mut self, address: Integer) -> Option<Integer>;
    fn poke(&mut self, address: Integer, value: Integer);
}

/// Memory provider for hosts without an address space.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMemory;

impl Memory for NoMemory {
    fn peek(&mut self, _address: Integer) -> Option<Integer> {
        None
    }
    fn poke(&mut self, _address: Integer, _value: Integer) {}
}

impl<M: Memory + ?Sized> Memory for &mut M {
    fn peek(&mut self, address: Integer) -> Option<Integer> {
        (**self).peek(address)
    }
    fn poke(&mut self, address: Integer, value: Integer) {
        (**self).poke(address, value)
    }
}
