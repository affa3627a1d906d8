use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
	#[error("{0}: command not found")]
	NotFound(String),
	#[error("PATH is not set")]
	PathUnset,
}

/// Resolves a bare command name against `PATH`, consulted afresh on every
/// call. The first directory containing a regular file of that name wins;
/// the execute bit is not checked, so a non-executable file still resolves
/// and fails later at exec time.
pub fn resolve(name: &str) -> Result<PathBuf, SearchError> {
	let path = env::var_os("PATH").ok_or(SearchError::PathUnset)?;
	resolve_in(name, env::split_paths(&path))
}

pub fn resolve_in<I>(name: &str, dirs: I) -> Result<PathBuf, SearchError>
where
	I: IntoIterator<Item = PathBuf>,
{
	for dir in dirs {
		let candidate = dir.join(name);
		if candidate.is_file() {
			return Ok(candidate);
		}
	}
	Err(SearchError::NotFound(name.to_owned()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn finds_a_regular_file() {
		let dir = tempdir().unwrap();
		let exe = dir.path().join("prog");
		fs::write(&exe, "").unwrap();
		let found = resolve_in("prog", [dir.path().to_path_buf()]).unwrap();
		assert_eq!(found, exe);
	}

	#[test]
	fn earlier_directory_wins() {
		let first = tempdir().unwrap();
		let second = tempdir().unwrap();
		fs::write(first.path().join("prog"), "").unwrap();
		fs::write(second.path().join("prog"), "").unwrap();
		let found = resolve_in(
			"prog",
			[first.path().to_path_buf(), second.path().to_path_buf()],
		)
		.unwrap();
		assert_eq!(found, first.path().join("prog"));
	}

	#[test]
	fn missing_name_is_not_found() {
		let dir = tempdir().unwrap();
		let err = resolve_in("prog", [dir.path().to_path_buf()]).unwrap_err();
		assert_eq!(err, SearchError::NotFound("prog".to_owned()));
	}

	#[test]
	fn a_directory_does_not_resolve() {
		let dir = tempdir().unwrap();
		fs::create_dir(dir.path().join("prog")).unwrap();
		let err = resolve_in("prog", [dir.path().to_path_buf()]).unwrap_err();
		assert_eq!(err, SearchError::NotFound("prog".to_owned()));
	}

	#[test]
	fn non_executable_file_still_resolves() {
		// the execute bit is deliberately ignored; exec reports the failure
		let dir = tempdir().unwrap();
		fs::write(dir.path().join("prog"), "not a binary").unwrap();
		assert!(resolve_in("prog", [dir.path().to_path_buf()]).is_ok());
	}
}
