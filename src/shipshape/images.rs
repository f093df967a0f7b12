//! External image conversion.
//!
//! The conversion program is a black box (cwebp by default). It runs
//! once per file under a bounded timeout; a timeout or non-zero exit is
//! a per-file failure and the source file is left untouched. The
//! timeout is enforced by polling `try_wait`, since a hung encoder on a
//! corrupt input would otherwise stall the whole batch.

use crate::error::{Result, ShipshapeError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ImageTool {
    pub program: String,
    /// Argument template; `{in}` and `{out}` are substituted per file
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl ImageTool {
    pub fn new(program: &str, args: &[String], timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
            timeout,
        }
    }

    /// Output path: the source path with a `.webp` extension.
    pub fn output_path(input: &Path) -> PathBuf {
        input.with_extension("webp")
    }

    /// Convert one file. Timeout and non-zero exit map to `Tool` errors.
    pub fn convert(&self, input: &Path) -> Result<PathBuf> {
        let output = Self::output_path(input);
        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| {
                a.replace("{in}", &input.to_string_lossy())
                    .replace("{out}", &output.to_string_lossy())
            })
            .collect();

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ShipshapeError::Tool(format!("{} failed to start: {}", self.program, e)))?;

        let started = Instant::now();
        loop {
            match child.try_wait().map_err(ShipshapeError::Io)? {
                Some(status) if status.success() => return Ok(output),
                Some(status) => {
                    return Err(ShipshapeError::Tool(format!(
                        "{} exited with {} for {}",
                        self.program,
                        status,
                        input.display()
                    )));
                }
                None => {
                    if started.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ShipshapeError::Tool(format!(
                            "{} timed out after {:?} for {}",
                            self.program,
                            self.timeout,
                            input.display()
                        )));
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}
