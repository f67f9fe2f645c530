//! External command execution.
//!
//! Wrangler is known to exit non-zero after doing its job, so success is
//! judged from both the exit code and what the process printed. See
//! [`evaluate`] for the exact rule.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::constants::SUCCESS_MARKER;
use crate::error::{CommandError, Result};

/// A process to run: program, arguments, and optional directory, extra
/// environment and stdin.
#[derive(Clone, Default)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    /// Added on top of the inherited environment.
    pub env: BTreeMap<String, String>,
    /// Written to stdin, then stdin is closed.
    pub input: Option<Zeroizing<Vec<u8>>>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn input(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.input = Some(Zeroizing::new(bytes.into()));
        self
    }

    /// Program and arguments joined for logs. Never includes env or input.
    pub fn display(&self) -> String {
        let mut parts = Vec::with_capacity(self.args.len() + 1);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("cwd", &self.cwd)
            .field("env", &self.env.keys().collect::<Vec<_>>())
            .field("input", &self.input.as_ref().map(|b| b.len()))
            .finish()
    }
}

/// Runs invocations to completion and returns captured stdout.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<String>;
}

/// Runs invocations as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn check_installed(program: &str) -> Result<()> {
        // Explicit paths are left to spawn to report.
        if program.contains(std::path::MAIN_SEPARATOR) {
            return Ok(());
        }
        which::which(program).map_err(|_| CommandError::NotInstalled {
            program: program.to_string(),
        })?;
        Ok(())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<String> {
        let program = invocation.program.clone();
        debug!(command = %invocation.display(), cwd = ?invocation.cwd, "running");

        Self::check_installed(&program)?;

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .envs(&invocation.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .stdin(if invocation.input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| CommandError::Spawn {
            program: program.clone(),
            source,
        })?;

        // Stdin is fed from its own thread so a child that stops reading
        // cannot stall the stdout reader, and one that exits early still
        // gets its output evaluated.
        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let input = invocation.input.as_ref();
        let (read, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || write_input(stdin, input));
            let read = read_output(stdout);
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (read, written)
        });

        // Always reap the child before reporting anything.
        let status = child.wait().map_err(|source| CommandError::Io {
            program: program.clone(),
            source,
        })?;
        let io_err = |source| CommandError::Io {
            program: program.clone(),
            source,
        };
        written.map_err(io_err)?;
        let output = read.map_err(io_err)?;
        debug!(code = ?status.code(), bytes = output.len(), "finished");

        evaluate(status.code(), output)
    }
}

/// Write `input` and close stdin. A child that exits or closes stdin early
/// is not an error; its exit status and output decide the result.
fn write_input(stdin: Option<ChildStdin>, input: Option<&Zeroizing<Vec<u8>>>) -> io::Result<()> {
    let (Some(mut stdin), Some(input)) = (stdin, input) else {
        return Ok(());
    };
    match stdin.write_all(input) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("child closed stdin before reading all input");
            Ok(())
        }
        other => other,
    }
}

/// Collect stdout as raw bytes, decoded lossily once the stream ends.
fn read_output(stdout: Option<ChildStdout>) -> io::Result<String> {
    let Some(stdout) = stdout else {
        return Ok(String::new());
    };
    let mut reader = BufReader::new(stdout);
    let mut raw = Vec::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        trace!(line = %String::from_utf8_lossy(&line).trim_end(), "stdout");
        raw.extend_from_slice(&line);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Decide whether a finished process counts as successful.
///
/// Succeeds when the exit code is zero, when nothing was printed, or when the
/// output contains the soft-success marker. Otherwise fails with the output
/// as the error message. A missing code (killed by signal) counts as non-zero.
pub fn evaluate(code: Option<i32>, output: String) -> Result<String> {
    if code == Some(0) || output.is_empty() || output.contains(SUCCESS_MARKER) {
        return Ok(output);
    }
    Err(CommandError::Failed { code, output }.into())
}
