use crate::job::JobRegistry;

/// Per-shell state handed by reference into the orchestrator and the
/// builtins. Lost when the hosting process exits; nothing is persisted.
pub struct Session {
	pub jobs: JobRegistry,
}

impl Session {
	pub fn new() -> Session {
		Session { jobs: JobRegistry::new() }
	}
}

impl Default for Session {
	fn default() -> Session {
		Session::new()
	}
}
