#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
	pub program: String,
	pub args: Vec<String>,
	pub input_file: Option<String>,
	pub output_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
	pub stages: Vec<Stage>,
	pub background: bool,
}
