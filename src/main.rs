use std::env;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use jsh::session::Session;
use jsh::{builtin, eval, logging, parser};

fn prompt() -> String {
	match env::current_dir() {
		Ok(dir) => format!("{} > ", dir.display()),
		Err(_) => "> ".to_owned(),
	}
}

fn main() -> Result<()> {
	logging::init();
	let mut session = Session::new();
	let mut rl = DefaultEditor::new()?;

	loop {
		match rl.readline(&prompt()) {
			Ok(line) => {
				let line = line.trim();
				if line.is_empty() {
					continue;
				}
				if line == "exit" {
					break;
				}
				let _ = rl.add_history_entry(line);
				let pipeline = match parser::parse(line) {
					Ok(pipeline) => pipeline,
					Err(e) => {
						eprintln!("jsh: {}", e);
						continue;
					}
				};
				if builtin::dispatch(&mut session, &pipeline) {
					continue;
				}
				eval::run(&mut session, &pipeline);
			}
			Err(ReadlineError::Interrupted) => continue,
			Err(ReadlineError::Eof) => break,
			Err(e) => return Err(e.into()),
		}
	}
	Ok(())
}
