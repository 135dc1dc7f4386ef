use colored::Colorize;

/// Sink for the single diagnostic line the bootstrap emits.
pub trait Console {
    fn log(&mut self, line: &str);
}

/// Writes diagnostics to stdout, green for rendered tables and yellow
/// otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&mut self, line: &str) {
        if line == crate::bootstrap::RENDERED_MESSAGE {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }
}

/// Keeps every line in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryConsole {
    lines: Vec<String>,
}

impl MemoryConsole {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Console for MemoryConsole {
    fn log(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

pub fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value.bold());
}
