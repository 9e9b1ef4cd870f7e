use std::process::ExitCode;
use std::str::FromStr;

const USAGE: &str = "\
Usage: xtask <task> [--dry-run] [-- <extra cargo args>...]

Tasks:
    setup    Install cargo-nextest and cargo-insta
    test     Run unit, integration and doc tests
    review   Re-run tests and review pending inline snapshots
    accept   Accept every pending snapshot
    bench    Run the divan benchmarks
    demo     Run the demo binary with debug logging on stderr";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Setup,
    Test,
    Review,
    Accept,
    Bench,
    Demo,
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "setup" => Task::Setup,
            "test" => Task::Test,
            "review" => Task::Review,
            "accept" => Task::Accept,
            "bench" => Task::Bench,
            "demo" => Task::Demo,
            _ => return Err(format!("unknown task `{s}`")),
        })
    }
}

/// One `cargo` invocation.
#[derive(Debug, PartialEq, Eq)]
struct Step {
    args: Vec<String>,
    log: Option<&'static str>,
}

impl Step {
    fn cargo(args: &str) -> Self {
        Self {
            args: args.split_whitespace().map(str::to_owned).collect(),
            log: None,
        }
    }

    fn with_extra(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }

    fn with_log(mut self, level: &'static str) -> Self {
        self.log = Some(level);
        self
    }

    fn run(&self) -> bool {
        let mut cmd = std::process::Command::new("cargo");
        cmd.args(&self.args);
        if let Some(level) = self.log {
            cmd.env("RUST_LOG", level);
        }
        match cmd.status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                eprintln!("xtask: `{self}` exited with {status}");
                false
            }
            Err(e) => {
                eprintln!("xtask: could not spawn cargo: {e}");
                false
            }
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(level) = self.log {
            write!(f, "RUST_LOG={level} ")?;
        }
        write!(f, "cargo {}", self.args.join(" "))
    }
}

impl Task {
    fn steps(self, extra: &[String]) -> Vec<Step> {
        match self {
            Task::Setup => vec![
                Step::cargo("install cargo-nextest --locked"),
                Step::cargo("install cargo-insta --locked"),
            ],
            Task::Test => vec![
                Step::cargo("nextest run -p tagged --all-targets").with_extra(extra),
                Step::cargo("test -p tagged --doc"),
            ],
            Task::Review => vec![Step::cargo("insta test -p tagged --review").with_extra(extra)],
            Task::Accept => vec![Step::cargo("insta accept")],
            Task::Bench => vec![Step::cargo("bench -p tagged --bench main --").with_extra(extra)],
            Task::Demo => vec![Step::cargo("run -p tagged --quiet").with_log("debug")],
        }
    }
}

/// Splits `args` into the task, the `--dry-run` flag and everything after `--`.
fn parse_args(args: &[String]) -> Result<(Task, bool, Vec<String>), String> {
    let (ours, extra) = match args.iter().position(|a| a == "--") {
        Some(i) => (&args[..i], args[i + 1..].to_vec()),
        None => (args, Vec::new()),
    };

    let mut task = None;
    let mut dry_run = false;
    for arg in ours {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "-h" | "--help" => return Err(String::new()),
            name if task.is_none() => task = Some(name.parse()?),
            other => return Err(format!("unexpected argument `{other}`")),
        }
    }

    let task = task.ok_or_else(|| String::from("missing task"))?;
    Ok((task, dry_run, extra))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (task, dry_run, extra) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            if !e.is_empty() {
                eprintln!("xtask: {e}\n");
            }
            println!("{USAGE}");
            return if e.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    for step in task.steps(&extra) {
        println!("$ {step}");
        if !dry_run && !step.run() {
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn extra_args_follow_the_separator() {
        let (task, dry_run, extra) = parse_args(&args(&["test", "--dry-run", "--", "syn"])).unwrap();
        assert_eq!(task, Task::Test);
        assert!(dry_run);
        assert_eq!(
            task.steps(&extra)[0].to_string(),
            "cargo nextest run -p tagged --all-targets syn"
        );
    }

    #[test]
    fn demo_enables_debug_logging() {
        let steps = Task::Demo.steps(&[]);
        assert_eq!(steps[0].to_string(), "RUST_LOG=debug cargo run -p tagged --quiet");
    }

    #[test]
    fn rejects_unknown_and_missing_tasks() {
        assert!(parse_args(&args(&["miri"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["test", "bench"])).is_err());
    }
}
