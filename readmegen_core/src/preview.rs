use crate::ReadmeError;
use crate::ReadmeResult;

/// Convert the generated README into HTML for previewing.
///
/// Uses GitHub flavored markdown and passes raw HTML through untouched,
/// since most of the document is inline HTML.
pub fn render_html(markdown: &str) -> ReadmeResult<String> {
	let mut options = markdown::Options::gfm();
	options.compile.allow_dangerous_html = true;

	markdown::to_html_with_options(markdown, &options)
		.map_err(|message| ReadmeError::Preview(message.to_string()))
}
