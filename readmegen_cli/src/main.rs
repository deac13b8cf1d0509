use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use readmegen_cli::Commands;
use readmegen_cli::ReadmegenCli;
use readmegen_cli::SkillsOutputFormat;
use readmegen_core::ProfileConfig;
use readmegen_core::config::ReadmegenConfig;
use readmegen_core::enabled_cards;
use readmegen_core::generate_markdown_seeded;
use readmegen_core::render_html;
use readmegen_core::store::LoadStatus;
use readmegen_core::store::ProfileStore;
use readmegen_core::taxonomy::SkillCategory;
use readmegen_core::taxonomy::TAXONOMY_VERSION;
use readmegen_core::template::TEMPLATE_FILE_NAME;
use readmegen_core::template::export_template;
use readmegen_core::workflow_for_profile;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# readmegen configuration\n\n[output]\n# Where the README is \
                             written, relative to this directory.\nreadme = \"README.md\"\n# \
                             Where the blog-post workflow is written when a blog feed is \
                             enabled.\nworkflow = \".github/workflows/blog-post-workflow.yml\"\n\n\
                             [render]\n# Fix the skill badge colors between runs.\n# seed = \
                             42\n";

fn main() {
	let args = ReadmegenCli::parse();

	// Color needs a capable terminal and no NO_COLOR or --no-color opt-out.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Generate { seed, dry_run }) => run_generate(&args, *seed, *dry_run),
		Some(Commands::Workflow) => run_workflow(&args),
		Some(Commands::Preview { seed }) => run_preview(&args, *seed),
		Some(Commands::Import { file }) => run_import(&args, file),
		Some(Commands::Export { output }) => run_export(&args, output.as_deref()),
		Some(Commands::Reset) => run_reset(&args),
		Some(Commands::Skills { format }) => run_skills(*format),
		None => {
			eprintln!("No subcommand specified. Run `readmegen --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<readmegen_core::ReadmeError>() {
			Ok(readme_err) => {
				let report: miette::Report = (*readme_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr so generated output on stdout stays clean.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_filter = if verbose {
		"readmegen=debug"
	} else {
		"readmegen=warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init();
}

fn resolve_root(args: &ReadmegenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Load the saved profile, telling the user when it had to be reset.
fn load_profile(root: &Path) -> Result<ProfileConfig, Box<dyn std::error::Error>> {
	let loaded = ProfileStore::new(root).load()?;

	match &loaded.status {
		LoadStatus::Missing => {
			eprintln!(
				"{} no saved profile found, using defaults. Run `readmegen init` to create one.",
				colored!("note:", yellow)
			);
		}
		LoadStatus::Reset { .. } => {
			eprintln!(
				"{} the saved profile is incompatible with this version and was replaced by \
				 the defaults. Run `readmegen reset` to overwrite it.",
				colored!("note:", yellow)
			);
		}
		LoadStatus::Loaded => {}
	}

	Ok(loaded.profile)
}

fn write_file(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
	if let Some(dir) = path.parent() {
		std::fs::create_dir_all(dir)?;
	}
	std::fs::write(path, content)?;
	Ok(())
}

fn run_init(args: &ReadmegenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let store = ProfileStore::new(&root);
	let snapshot_exists = store.exists();

	if snapshot_exists {
		println!("Profile snapshot already exists: {}", store.path().display());
	} else {
		store.save(&ProfileConfig::default())?;
		println!("Created profile snapshot: {}", store.path().display());
	}

	if let Some(config_path) = ReadmegenConfig::resolve_path(&root) {
		debug!(path = %config_path.display(), "config file already exists");
	} else {
		std::fs::write(root.join("readmegen.toml"), SAMPLE_CONFIG)?;
		println!("Created readmegen.toml");
	}

	if !snapshot_exists {
		println!();
		println!("Next steps:");
		println!(
			"  1. Edit {} or run `readmegen import <FILE>` with a shared template",
			store.path().display()
		);
		println!("  2. Run `readmegen generate` to write your README");
	}

	Ok(())
}

fn run_generate(
	args: &ReadmegenCli,
	seed: Option<u64>,
	dry_run: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = ReadmegenConfig::load_or_default(&root)?;
	let profile = load_profile(&root)?;

	let seed = seed.or(config.render.seed);
	let readme = generate_markdown_seeded(&profile, seed);
	let readme_path = root.join(&config.output.readme);

	let workflow = profile
		.has_blog_feed()
		.then(|| (root.join(&config.output.workflow), workflow_for_profile(&profile)));

	if dry_run {
		println!(
			"Dry run: would write {}",
			make_relative(&readme_path, &root)
		);
		println!();
		println!("{readme}");

		if let Some((workflow_path, workflow)) = &workflow {
			println!(
				"Dry run: would write {}",
				make_relative(workflow_path, &root)
			);
			println!();
			println!("{workflow}");
		}

		return Ok(());
	}

	write_file(&readme_path, &readme)?;
	println!(
		"{} {}",
		colored!("Wrote", green),
		make_relative(&readme_path, &root)
	);

	if let Some((workflow_path, workflow)) = &workflow {
		write_file(workflow_path, workflow)?;
		println!(
			"{} {}",
			colored!("Wrote", green),
			make_relative(workflow_path, &root)
		);
	}

	if args.verbose {
		let cards = enabled_cards(&profile);
		if !cards.is_empty() {
			println!("  analytics: {}", cards.join(", "));
		}
		println!("  skills: {}", profile.skills.len());
	}

	Ok(())
}

fn run_workflow(args: &ReadmegenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let profile = load_profile(&root)?;

	if !profile.has_blog_feed() {
		eprintln!(
			"{} no blog feed is enabled, the workflow will not pull in any posts.",
			colored!("warning:", yellow)
		);
	}

	println!("{}", workflow_for_profile(&profile));
	Ok(())
}

fn run_preview(args: &ReadmegenCli, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = ReadmegenConfig::load_or_default(&root)?;
	let profile = load_profile(&root)?;

	let readme = generate_markdown_seeded(&profile, seed.or(config.render.seed));
	println!("{}", render_html(&readme)?);
	Ok(())
}

fn run_import(args: &ReadmegenCli, file: &Path) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let content = std::fs::read_to_string(file)?;
	let profile = ProfileStore::new(&root).import(&content)?;

	println!(
		"{} template from {}",
		colored!("Imported", green),
		file.display()
	);
	println!("  skills: {}", profile.skills.len());
	Ok(())
}

fn run_export(args: &ReadmegenCli, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let profile = load_profile(&root)?;
	let path = root.join(output.unwrap_or_else(|| Path::new(TEMPLATE_FILE_NAME)));

	write_file(&path, &export_template(&profile)?)?;
	println!(
		"{} profile to {}",
		colored!("Exported", green),
		make_relative(&path, &root)
	);
	Ok(())
}

fn run_reset(args: &ReadmegenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let store = ProfileStore::new(&root);
	store.reset()?;

	println!("Restored the default profile: {}", store.path().display());
	Ok(())
}

fn run_skills(format: SkillsOutputFormat) -> Result<(), Box<dyn std::error::Error>> {
	match format {
		SkillsOutputFormat::Text => {
			for (index, category) in SkillCategory::ALL.into_iter().enumerate() {
				if index > 0 {
					println!();
				}
				println!("{}", colored!(category.label(), bold));
				for entry in category.entries() {
					println!("  {:<20} {}", entry.name, entry.display_name);
				}
			}
		}
		SkillsOutputFormat::Json => {
			let categories: Vec<_> = SkillCategory::ALL
				.into_iter()
				.map(|category| {
					let skills: Vec<_> = category
						.entries()
						.iter()
						.map(|entry| {
							serde_json::json!({
								"name": entry.name,
								"displayName": entry.display_name,
								"icon": entry.icon,
							})
						})
						.collect();
					serde_json::json!({
						"category": category.label(),
						"skills": skills,
					})
				})
				.collect();
			let output = serde_json::json!({
				"version": TAXONOMY_VERSION,
				"categories": categories,
			});
			println!("{}", serde_json::to_string_pretty(&output)?);
		}
	}

	Ok(())
}
