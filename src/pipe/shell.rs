use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use wait_timeout::ChildExt;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, std::process::ExitStatus),
    #[error("Command output was not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Execute a shell command with the given input piped to stdin.
///
/// Returns the command's stdout on success. The command's stderr goes
/// straight to ours.
///
/// # Arguments
///
/// * `command_str` - The shell command to execute
/// * `input` - Data to write to the command's stdin
/// * `timeout` - Optional timeout; if exceeded, the process is killed
pub fn run_piped(
    command_str: &str,
    input: &str,
    timeout: Option<Duration>,
) -> Result<String, ShellError> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_str);
        c
    } else {
        let mut c = Command::new("/bin/sh");
        c.arg("-c").arg(command_str);
        c
    };

    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn()?;
    tracing::debug!(command = command_str, "spawned pass-output command");

    // stdin and stdout are pumped on their own threads so a command that
    // produces lots of output before reading all its input cannot stall.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_string();
        thread::spawn(move || match stdin.write_all(input.as_bytes()) {
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        })
    });
    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut output = Vec::new();
            stdout.read_to_end(&mut output).map(|_| output)
        })
    });

    let status = match timeout {
        Some(duration) => match child.wait_timeout(duration)? {
            Some(status) => status,
            None => {
                // Only `sh` is killed. A grandchild still holding stdout keeps
                // the reader thread blocked until it exits; it is not joined
                // so the timeout is reported right away.
                child.kill()?;
                child.wait()?;
                return Err(ShellError::Timeout(command_str.to_string(), duration));
            }
        },
        None => child.wait()?,
    };

    if let Some(writer) = writer {
        join_io(writer)?;
    }
    let output = match reader {
        Some(reader) => join_io(reader)?,
        None => Vec::new(),
    };

    if !status.success() {
        return Err(ShellError::CommandFailed(command_str.to_string(), status));
    }

    Ok(String::from_utf8(output)?)
}

fn join_io<T>(handle: thread::JoinHandle<std::io::Result<T>>) -> Result<T, ShellError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("pipe thread panicked")))
        .map_err(ShellError::from)
}
