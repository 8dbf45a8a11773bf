//! Line-oriented console I/O shared by every front-end

use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-oriented console over any reader/writer pair
///
/// The process uses stdin/stdout; tests script the input and capture the output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard streams
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` without a newline and read one trimmed line
    ///
    /// End of input reads as an empty line.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn println(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()
    }
}
