use thiserror::Error;

use crate::types::{Pipeline, Stage};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("empty stage in pipeline")]
	EmptyStage,
}

/// Extracts `<`/`>` redirection pairs from one segment's tokens and builds a
/// stage. A redirection operator with no following token is left in place as
/// an ordinary argument; repeated operators overwrite, so the last one wins.
fn build_stage(mut tokens: Vec<String>) -> Result<Stage, ParseError> {
	let mut input_file = None;
	let mut output_file = None;
	let mut i = 0;
	while i < tokens.len() {
		let is_redirect = tokens[i] == "<" || tokens[i] == ">";
		if is_redirect && i + 1 < tokens.len() {
			let target = tokens.remove(i + 1);
			let operator = tokens.remove(i);
			if operator == "<" {
				input_file = Some(target);
			} else {
				output_file = Some(target);
			}
		} else {
			i += 1;
		}
	}
	let mut tokens = tokens.into_iter();
	let program = tokens.next().ok_or(ParseError::EmptyStage)?;
	Ok(Stage {
		program,
		args: tokens.collect(),
		input_file,
		output_file,
	})
}

/// Splits a line into pipeline stages on `|` and each stage on single
/// spaces. No quoting, escaping or glob expansion. A trailing `&` on the
/// final segment marks the whole pipeline as background; `&` anywhere else
/// is an ordinary argument.
pub fn parse(line: &str) -> Result<Pipeline, ParseError> {
	let segments: Vec<&str> = line.split('|').collect();
	let last = segments.len() - 1;
	let mut background = false;
	let mut stages = Vec::with_capacity(segments.len());
	for (i, segment) in segments.iter().enumerate() {
		let mut tokens: Vec<String> = segment
			.split(' ')
			.filter(|t| !t.is_empty())
			.map(str::to_owned)
			.collect();
		if i == last && tokens.last().map(String::as_str) == Some("&") {
			background = true;
			tokens.pop();
		}
		stages.push(build_stage(tokens)?);
	}
	Ok(Pipeline { stages, background })
}
