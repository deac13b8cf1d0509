use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::taxonomy::SkillCategory;
use crate::taxonomy::TaxonomyEntry;

/// Everything needed to render a profile README.
///
/// Every group carries `#[serde(default)]`, so a partial JSON payload is
/// merged onto [`ProfileConfig::default`] at every depth: missing keys keep
/// their default value and unknown keys are ignored.
///
/// ```json
/// {
///   "userName": "Ada",
///   "social": { "github": "ada" },
///   "stats": { "showStats": true, "statsTheme": "dark" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileConfig {
	pub user_name: String,
	pub user_bio: String,
	/// One item per line. A line of the form `name|url` renders as a linked
	/// badge.
	pub current_work: String,
	/// One item per line.
	pub current_learning: String,
	/// One item per line.
	pub ask_about: String,
	pub user_email: String,
	pub portfolio_url: String,
	pub blog_url: String,
	pub location: String,
	pub pronouns: String,
	/// Ordered and unique by [`Skill::name`].
	pub skills: Vec<Skill>,
	pub social: SocialLinks,
	pub stats: StatsConfig,
	pub blog: BlogConfig,
	pub buy_me_coffee_username: String,
	pub sponsor_url: String,
	pub achievements: Achievements,
	pub custom: CustomSections,
}

impl ProfileConfig {
	/// Returns true if a skill with the given identifier is selected.
	pub fn has_skill(&self, name: &str) -> bool {
		self.skills.iter().any(|skill| skill.name == name)
	}

	/// Select the skill if it is absent, otherwise remove it.
	pub fn toggle_skill(&mut self, entry: &TaxonomyEntry, category: SkillCategory) {
		if self.has_skill(entry.name) {
			self.skills.retain(|skill| skill.name != entry.name);
		} else {
			self.skills.push(Skill::from_entry(entry, category));
		}
	}

	/// The GitHub username, if one is set. Every analytics block depends on
	/// it.
	pub fn github_username(&self) -> Option<&str> {
		present(&self.social.github)
	}

	/// Returns true if any blog feed is enabled.
	pub fn has_blog_feed(&self) -> bool {
		self.blog.show_devto_posts || self.blog.show_medium_posts || self.blog.show_rss_posts
	}
}

/// A selected skill.
///
/// Only `name` is required. Entries from the taxonomy also carry an icon and
/// display name; entries imported from elsewhere may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
	pub name: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub icon: String,
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub display_name: String,
	#[serde(default)]
	pub category: String,
}

impl Skill {
	pub fn from_entry(entry: &TaxonomyEntry, category: SkillCategory) -> Self {
		Self {
			name: entry.name.to_string(),
			icon: entry.icon.to_string(),
			display_name: entry.display_name.to_string(),
			category: category.label().to_string(),
		}
	}

	/// The badge label: the identifier with its first character uppercased.
	pub fn badge_label(&self) -> String {
		let mut chars = self.name.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	}
}

/// Supported social platforms, in the order their links are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
	Github,
	Linkedin,
	Twitter,
	Devto,
	Medium,
	Youtube,
	Instagram,
	Facebook,
	Codepen,
	Hashnode,
}

impl SocialPlatform {
	pub const ALL: [SocialPlatform; 10] = [
		Self::Github,
		Self::Linkedin,
		Self::Twitter,
		Self::Devto,
		Self::Medium,
		Self::Youtube,
		Self::Instagram,
		Self::Facebook,
		Self::Codepen,
		Self::Hashnode,
	];

	/// Key used in the JSON payload and as the shields.io logo name.
	pub fn key(self) -> &'static str {
		match self {
			Self::Github => "github",
			Self::Linkedin => "linkedin",
			Self::Twitter => "twitter",
			Self::Devto => "devto",
			Self::Medium => "medium",
			Self::Youtube => "youtube",
			Self::Instagram => "instagram",
			Self::Facebook => "facebook",
			Self::Codepen => "codepen",
			Self::Hashnode => "hashnode",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Github => "GitHub",
			Self::Linkedin => "LinkedIn",
			Self::Twitter => "Twitter",
			Self::Devto => "Dev.to",
			Self::Medium => "Medium",
			Self::Youtube => "YouTube",
			Self::Instagram => "Instagram",
			Self::Facebook => "Facebook",
			Self::Codepen => "CodePen",
			Self::Hashnode => "Hashnode",
		}
	}

	/// Profile URL prefix; the username is appended directly.
	pub fn profile_url(self) -> &'static str {
		match self {
			Self::Github => "https://github.com/",
			Self::Linkedin => "https://linkedin.com/in/",
			Self::Twitter => "https://twitter.com/",
			Self::Devto => "https://dev.to/",
			Self::Medium => "https://medium.com/@",
			Self::Youtube => "https://www.youtube.com/c/",
			Self::Instagram => "https://instagram.com/",
			Self::Facebook => "https://fb.com/",
			Self::Codepen => "https://codepen.io/",
			Self::Hashnode => "https://hashnode.com/@",
		}
	}

	/// Badge background color (hex, no `#`).
	pub fn color(self) -> &'static str {
		match self {
			Self::Github => "333",
			Self::Linkedin => "0077B5",
			Self::Twitter => "1DA1F2",
			Self::Devto => "0A0A0A",
			Self::Medium => "12100E",
			Self::Youtube => "FF0000",
			Self::Instagram => "E4405F",
			Self::Facebook => "1877F2",
			Self::Codepen => "000000",
			Self::Hashnode => "2962FF",
		}
	}
}

impl fmt::Display for SocialPlatform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

/// Usernames keyed by platform. An empty string omits the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
	pub github: String,
	pub linkedin: String,
	pub twitter: String,
	pub devto: String,
	pub medium: String,
	pub youtube: String,
	pub instagram: String,
	pub facebook: String,
	pub codepen: String,
	pub hashnode: String,
}

impl SocialLinks {
	pub fn get(&self, platform: SocialPlatform) -> &str {
		match platform {
			SocialPlatform::Github => &self.github,
			SocialPlatform::Linkedin => &self.linkedin,
			SocialPlatform::Twitter => &self.twitter,
			SocialPlatform::Devto => &self.devto,
			SocialPlatform::Medium => &self.medium,
			SocialPlatform::Youtube => &self.youtube,
			SocialPlatform::Instagram => &self.instagram,
			SocialPlatform::Facebook => &self.facebook,
			SocialPlatform::Codepen => &self.codepen,
			SocialPlatform::Hashnode => &self.hashnode,
		}
	}

	pub fn set(&mut self, platform: SocialPlatform, username: impl Into<String>) {
		let slot = match platform {
			SocialPlatform::Github => &mut self.github,
			SocialPlatform::Linkedin => &mut self.linkedin,
			SocialPlatform::Twitter => &mut self.twitter,
			SocialPlatform::Devto => &mut self.devto,
			SocialPlatform::Medium => &mut self.medium,
			SocialPlatform::Youtube => &mut self.youtube,
			SocialPlatform::Instagram => &mut self.instagram,
			SocialPlatform::Facebook => &mut self.facebook,
			SocialPlatform::Codepen => &mut self.codepen,
			SocialPlatform::Hashnode => &mut self.hashnode,
		};
		*slot = username.into();
	}

	/// Populated platforms in declaration order.
	pub fn populated(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
		SocialPlatform::ALL
			.into_iter()
			.filter_map(|platform| present(self.get(platform)).map(|name| (platform, name)))
	}
}

/// Color theme for the github-readme-stats family of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CardTheme {
	#[default]
	Default,
	Dark,
	Radical,
	Merko,
	Gruvbox,
	Tokyonight,
	Onedark,
	Cobalt,
	Synthwave,
	Highcontrast,
}

impl CardTheme {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Dark => "dark",
			Self::Radical => "radical",
			Self::Merko => "merko",
			Self::Gruvbox => "gruvbox",
			Self::Tokyonight => "tokyonight",
			Self::Onedark => "onedark",
			Self::Cobalt => "cobalt",
			Self::Synthwave => "synthwave",
			Self::Highcontrast => "highcontrast",
		}
	}

	/// The `&theme=…` query fragment, or nothing for the default theme.
	pub fn query(self) -> String {
		match self {
			Self::Default => String::new(),
			theme => format!("&theme={}", theme.as_str()),
		}
	}
}

impl fmt::Display for CardTheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Toggles for the GitHub analytics blocks and the visitor counter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct StatsConfig {
	pub show_stats: bool,
	pub show_languages: bool,
	pub show_streak: bool,
	pub show_trophy: bool,
	pub show_visitors: bool,
	pub show_activity: bool,
	pub show_contributions: bool,
	pub show_productivity_stats: bool,
	pub show_waka_time: bool,
	pub show_commit_graph: bool,
	pub show_codetime: bool,
	pub show_metrics: bool,
	pub show_summary_card: bool,
	pub show_detailed_stats: bool,
	pub stats_theme: CardTheme,
	pub languages_theme: CardTheme,
	pub waka_time_username: String,
}

/// Blog feeds pulled in by the blog-post workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogConfig {
	pub show_devto_posts: bool,
	pub show_medium_posts: bool,
	pub show_rss_posts: bool,
	pub rss_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Achievements {
	pub show_certifications: bool,
	pub certifications: String,
	pub show_education: bool,
	pub education: String,
	pub show_awards: bool,
	pub awards: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct CustomSections {
	pub show_fun_facts: bool,
	pub fun_facts: String,
	pub show_goals: bool,
	pub goals: String,
	pub show_quote: bool,
	pub quote: String,
	pub show_timezone: bool,
	pub timezone: String,
	pub show_hobbies: bool,
	pub hobbies: String,
}

/// Returns the trimmed value, or `None` when it is empty or whitespace.
pub fn present(value: &str) -> Option<&str> {
	let trimmed = value.trim();
	(!trimmed.is_empty()).then_some(trimmed)
}

/// Returns the text when its toggle is on and it has visible content.
pub fn gated(toggle: bool, text: &str) -> Option<&str> {
	if toggle { present(text) } else { None }
}

/// Split multi-line text into trimmed items, dropping blank lines.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
	text.lines().map(str::trim).filter(|line| !line.is_empty())
}
