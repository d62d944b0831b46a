use crate::lang::Integer;
use crate::mach::{Event, Memory, Runtime};

mod gosub_test;
mod peek_poke_test;

fn run(program: &str) -> String {
    run_cycles(program, 5000)
}

fn run_cycles(program: &str, cycles: usize) -> String {
    let mut runtime = Runtime::new(program, String::new());
    let mut s = String::new();
    match runtime.execute(cycles) {
        Event::Stopped => {}
        Event::Running => {
            s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
        }
        Event::Error(error) => {
            s.push_str(&format!("?{}\n", error));
        }
    }
    let (mut out, _) = runtime.into_parts();
    out.push_str(&s);
    out
}

/// Sixteen cells of memory that remember every write.
#[derive(Debug, Default)]
struct Cells {
    cells: [Integer; 16],
    writes: Vec<(Integer, Integer)>,
}

impl Memory for Cells {
    fn peek(&mut self, address: Integer) -> Option<Integer> {
        self.cells.get(address as usize).copied()
    }
    fn poke(&mut self, address: Integer, value: Integer) {
        self.writes.push((address, value));
        if let Some(cell) = self.cells.get_mut(address as usize) {
            *cell = value;
        }
    }
}
