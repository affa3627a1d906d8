use std::env;

use crate::session::Session;
use crate::types::Pipeline;

pub fn builtin_cd(_session: &mut Session, args: &[String]) -> u8 {
	let Some(dir) = args.first() else {
		eprintln!("cd: missing argument");
		return 1;
	};
	match env::set_current_dir(dir) {
		Ok(()) => 0,
		Err(e) => {
			eprintln!("chdir failed: {}", e);
			1
		}
	}
}

pub fn builtin_myjobs(session: &mut Session, _args: &[String]) -> u8 {
	for job in session.jobs.list() {
		println!("{}", job);
	}
	0
}

pub fn match_builtin(name: &str) -> Option<fn(&mut Session, &[String]) -> u8> {
	match name {
		"cd" => Some(builtin_cd),
		"myjobs" => Some(builtin_myjobs),
		_ => None,
	}
}

/// Runs the line as a builtin if its first stage names one. Builtins consume
/// the whole line; anything piped after them is ignored.
pub fn dispatch(session: &mut Session, pipeline: &Pipeline) -> bool {
	let first = &pipeline.stages[0];
	match match_builtin(&first.program) {
		Some(builtin) => {
			builtin(session, &first.args);
			true
		}
		None => false,
	}
}
