use std::os::fd::OwnedFd;

use nix::fcntl::OFlag;
use nix::unistd;
use tracing::debug;

use crate::job::JobStatus;
use crate::search::{self, SearchError};
use crate::session::Session;
use crate::spawn::{self, Handle};
use crate::types::Pipeline;

/// Runs a pipeline: resolve, chain pipes, fork every stage left to right,
/// then reap foreground stages in spawn order. Errors are reported on
/// stderr and abort the remaining pipeline; stages forked before the abort
/// are left running detached, with only their spawn-time snapshot recorded.
pub fn run(session: &mut Session, pipeline: &Pipeline) {
	if pipeline.stages.is_empty() {
		return;
	}
	let last = pipeline.stages.len() - 1;
	let mut carried: Option<OwnedFd> = None;
	let mut spawned: Vec<Handle> = Vec::with_capacity(pipeline.stages.len());
	let mut aborted = false;

	for (i, stage) in pipeline.stages.iter().enumerate() {
		let (read_end, write_end) = if i < last {
			match unistd::pipe2(OFlag::O_CLOEXEC) {
				Ok((r, w)) => (Some(r), Some(w)),
				Err(e) => {
					eprintln!("Pipe failed: {}", e);
					aborted = true;
					break;
				}
			}
		} else {
			(None, None)
		};

		let path = match search::resolve(&stage.program) {
			Ok(path) => path,
			Err(e @ SearchError::NotFound(_)) => {
				eprintln!("{}", e);
				aborted = true;
				break;
			}
			Err(e @ SearchError::PathUnset) => {
				eprintln!("jsh: {}", e);
				aborted = true;
				break;
			}
		};
		debug!(program = %stage.program, path = %path.display(), "resolved");

		// the spawner closes the parent's copies of both handed-off ends;
		// the new pipe's read end is carried forward as the next stage's
		// input unless that stage redirects from a file
		let handle = match spawn::spawn(stage, &path, carried.take(), write_end) {
			Ok(handle) => handle,
			Err(e) => {
				eprintln!("{}", e);
				aborted = true;
				break;
			}
		};
		session.jobs.record(handle.pid(), &stage.program);
		spawned.push(handle);
		carried = read_end;
	}
	drop(carried);

	if pipeline.background || aborted {
		for handle in &spawned {
			session.jobs.update(handle.pid(), probe_status(handle));
		}
	} else {
		for handle in &spawned {
			match handle.wait() {
				Ok(status) => debug!(pid = handle.pid(), ?status, "reaped"),
				Err(e) => debug!(pid = handle.pid(), error = %e, "wait failed"),
			}
			session.jobs.update(handle.pid(), probe_status(handle));
		}
	}
}

fn probe_status(handle: &Handle) -> JobStatus {
	if handle.probe_alive() {
		JobStatus::Active
	} else {
		JobStatus::Inactive
	}
}
