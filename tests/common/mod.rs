use basic::mach::{Event, Runtime};

pub fn run(program: &str) -> String {
    let mut runtime = Runtime::new(program, String::new());
    exec(&mut runtime)
}

pub fn exec(runtime: &mut Runtime<String>) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime<String>, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        s.push_str(&std::mem::take(runtime.console_mut()));
        let running = event == Event::Running;
        match event {
            Event::Stopped => break,
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        prev_running = running;
    }
    s
}
