use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ReadmeError {
	#[error(transparent)]
	#[diagnostic(code(readmegen::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid template file format: {0}")]
	#[diagnostic(
		code(readmegen::template_parse),
		help("templates are JSON objects produced by `readmegen export`; the saved profile was left unchanged")
	)]
	TemplateParse(String),

	#[error("failed to serialize profile: {0}")]
	#[diagnostic(code(readmegen::serialize))]
	Serialize(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(readmegen::config_parse),
		help("check that readmegen.toml is valid TOML with [output] and/or [render] sections")
	)]
	ConfigParse(String),

	#[error("failed to render html preview: {0}")]
	#[diagnostic(code(readmegen::preview))]
	Preview(String),
}

pub type ReadmeResult<T> = Result<T, ReadmeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
