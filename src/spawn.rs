use std::convert::Infallible;
use std::ffi::{CStr, CString};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::{AsRawFd, OwnedFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::pid_t;
use nix::sys::signal::{self, Signal};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};
use thiserror::Error;
use tracing::debug;

use crate::types::Stage;

#[derive(Debug, Error)]
pub enum SpawnError {
	#[error("Fork failed")]
	Fork(#[source] nix::Error),
	#[error("argument contains an interior NUL byte")]
	BadArgument(#[from] std::ffi::NulError),
}

#[derive(Debug, Error)]
enum ExecError {
	#[error("{0}")]
	Io(#[from] io::Error),
	#[error("{0}")]
	Sys(#[from] nix::Error),
}

/// A forked child. `wait` reaps it; `probe_alive` delivers the zero signal,
/// which has no effect on the target and only reports whether the pid still
/// refers to a running process.
pub struct Handle {
	pid: Pid,
}

impl Handle {
	pub fn pid(&self) -> pid_t {
		self.pid.as_raw()
	}

	pub fn wait(&self) -> nix::Result<WaitStatus> {
		waitpid(self.pid, None)
	}

	pub fn probe_alive(&self) -> bool {
		signal::kill(self.pid, None::<Signal>).is_ok()
	}
}

/// Forks one stage and execs `path`, wiring `input`/`output` (pipe ends, if
/// any) onto the child's stdin/stdout unless the stage carries an explicit
/// file redirection, which takes precedence. In the parent the passed-in
/// descriptors are dropped on return, closing its copies of the ends just
/// handed to the child.
pub fn spawn(
	stage: &Stage,
	path: &Path,
	input: Option<OwnedFd>,
	output: Option<OwnedFd>,
) -> Result<Handle, SpawnError> {
	// argv is assembled before forking; allocation in the child is kept to
	// the redirection-open path only
	let exe = CString::new(path.as_os_str().as_bytes())?;
	let mut argv = Vec::with_capacity(stage.args.len() + 1);
	argv.push(CString::new(stage.program.as_bytes())?);
	for arg in &stage.args {
		argv.push(CString::new(arg.as_bytes())?);
	}

	match unsafe { unistd::fork() }.map_err(SpawnError::Fork)? {
		ForkResult::Parent { child } => {
			debug!(pid = child.as_raw(), program = %stage.program, "spawned");
			Ok(Handle { pid: child })
		}
		ForkResult::Child => exec_stage(stage, &exe, &argv, input, output),
	}
}

fn exec_stage(
	stage: &Stage,
	exe: &CStr,
	argv: &[CString],
	input: Option<OwnedFd>,
	output: Option<OwnedFd>,
) -> ! {
	if let Err(e) = do_exec(stage, exe, argv, input, output) {
		eprintln!("{}: {}", stage.program, e);
	}
	unsafe { libc::_exit(126) }
}

fn do_exec(
	stage: &Stage,
	exe: &CStr,
	argv: &[CString],
	input: Option<OwnedFd>,
	output: Option<OwnedFd>,
) -> Result<Infallible, ExecError> {
	// an unopenable redirection degrades to the inherited descriptor
	let input = match &stage.input_file {
		Some(name) => match File::open(name) {
			Ok(file) => Some(OwnedFd::from(file)),
			Err(e) => {
				eprintln!("open for input: {}", e);
				input
			}
		},
		None => input,
	};
	let output = match &stage.output_file {
		Some(name) => {
			let opened = OpenOptions::new()
				.write(true)
				.create(true)
				.truncate(true)
				.open(name);
			match opened {
				Ok(file) => Some(OwnedFd::from(file)),
				Err(e) => {
					eprintln!("open for output: {}", e);
					output
				}
			}
		}
		None => output,
	};

	// only the dup2 targets survive the exec: every original is O_CLOEXEC
	// and dropped as soon as it has been duplicated
	if let Some(fd) = input {
		unistd::dup2(fd.as_raw_fd(), libc::STDIN_FILENO)?;
	}
	if let Some(fd) = output {
		unistd::dup2(fd.as_raw_fd(), libc::STDOUT_FILENO)?;
	}
	Ok(unistd::execv(exe, argv)?)
}
