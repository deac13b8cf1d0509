use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate a GitHub profile README from a saved profile.",
	long_about = "readmegen builds a GitHub profile README from a profile saved in \
	              `.readmegen/profile.json`.\n\nWhen blog feeds are enabled it also writes \
	              the GitHub Actions workflow that keeps the README's blog post list \
	              current.\n\nQuick start:\n  readmegen init      Create the profile \
	              snapshot\n  readmegen import    Load a shared template\n  readmegen \
	              generate  Write README.md"
)]
pub struct ReadmegenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create the profile snapshot and a sample `readmegen.toml`.
	///
	/// Existing files are left untouched.
	Init,
	/// Render the README from the saved profile.
	///
	/// Writes the README to the configured output path. When any blog feed
	/// is enabled, the blog-post workflow is written as well.
	Generate {
		/// Seed for skill badge colors. Overrides `render.seed` from the
		/// config file.
		#[arg(long)]
		seed: Option<u64>,

		/// Print the generated files instead of writing them.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Print the blog-post GitHub Actions workflow.
	Workflow,
	/// Print an HTML preview of the README.
	Preview {
		/// Seed for skill badge colors.
		#[arg(long)]
		seed: Option<u64>,
	},
	/// Replace the saved profile with a JSON template.
	///
	/// The saved profile is unchanged when the template is invalid.
	Import {
		/// The template file to import.
		file: PathBuf,
	},
	/// Export the saved profile as a shareable JSON template.
	Export {
		/// Where to write the template. Relative paths resolve against the
		/// project root.
		#[arg(long, short)]
		output: Option<PathBuf>,
	},
	/// Restore the default profile.
	Reset,
	/// List the selectable skills by category.
	Skills {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = SkillsOutputFormat::Text)]
		format: SkillsOutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SkillsOutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
