use flexi_logger::Logger;

struct WriteStdout(std::io::Stdout);

impl core::fmt::Write for WriteStdout {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        use std::io::Write as _;

        self.0.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}

fn stdout() -> WriteStdout {
    WriteStdout(std::io::stdout())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;

    tagged::inspect::demo(stdout())?;

    Ok(())
}
