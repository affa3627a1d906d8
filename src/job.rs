use std::collections::HashMap;
use std::fmt;

use libc::pid_t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
	Unknown,
	Active,
	Inactive,
}

impl fmt::Display for JobStatus {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let text = match *self {
			JobStatus::Unknown => "in an unknown state",
			JobStatus::Active => "active",
			JobStatus::Inactive => "no longer active",
		};
		f.write_str(text)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
	pub pid: pid_t,
	pub label: String,
	pub status: JobStatus,
}

impl fmt::Display for Job {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:\t{}: this process is {}", self.pid, self.label, self.status)
	}
}

/// Pid-keyed map of every process this session ever spawned. Entries are
/// never evicted, and a status is the snapshot taken by the last probe, not
/// a live value.
#[derive(Debug, Default)]
pub struct JobRegistry {
	jobs: HashMap<pid_t, Job>,
}

impl JobRegistry {
	pub fn new() -> JobRegistry {
		JobRegistry::default()
	}

	pub fn record(&mut self, pid: pid_t, label: &str) {
		let job = Job {
			pid,
			label: label.to_owned(),
			status: JobStatus::Unknown,
		};
		self.jobs.insert(pid, job);
	}

	pub fn update(&mut self, pid: pid_t, status: JobStatus) {
		if let Some(job) = self.jobs.get_mut(&pid) {
			job.status = status;
		}
	}

	pub fn get(&self, pid: pid_t) -> Option<&Job> {
		self.jobs.get(&pid)
	}

	/// All jobs, in unspecified order.
	pub fn list(&self) -> Vec<&Job> {
		self.jobs.values().collect()
	}

	pub fn len(&self) -> usize {
		self.jobs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.jobs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_starts_unknown() {
		let mut registry = JobRegistry::new();
		registry.record(42, "sleep");
		assert_eq!(registry.get(42).unwrap().status, JobStatus::Unknown);
	}

	#[test]
	fn update_replaces_status() {
		let mut registry = JobRegistry::new();
		registry.record(42, "sleep");
		registry.update(42, JobStatus::Active);
		assert_eq!(registry.get(42).unwrap().status, JobStatus::Active);
	}

	#[test]
	fn update_of_unrecorded_pid_is_ignored() {
		let mut registry = JobRegistry::new();
		registry.update(7, JobStatus::Active);
		assert!(registry.is_empty());
	}

	#[test]
	fn display_matches_the_myjobs_format() {
		let job = Job {
			pid: 123,
			label: "sleep".to_owned(),
			status: JobStatus::Inactive,
		};
		assert_eq!(job.to_string(), "123:\tsleep: this process is no longer active");
	}

	#[test]
	fn list_is_idempotent() {
		let mut registry = JobRegistry::new();
		registry.record(1, "a");
		registry.record(2, "b");
		registry.update(1, JobStatus::Active);
		let first: Vec<Job> = registry.list().into_iter().cloned().collect();
		let second: Vec<Job> = registry.list().into_iter().cloned().collect();
		assert_eq!(first.len(), 2);
		assert_eq!(first, second);
	}
}
