use std::borrow::Cow;
use std::fmt::Write;

use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::analytics;
use crate::profile::ProfileConfig;
use crate::profile::gated;
use crate::profile::non_blank_lines;
use crate::profile::present;

/// Palette the skill badge colors are drawn from.
pub const SKILL_BADGE_COLORS: [&str; 8] = [
	"667eea", "764ba2", "43e97b", "38f9d7", "f093fb", "f5576c", "4facfe", "00f2fe",
];

/// Marker comments the blog-post workflow writes its list between.
pub const BLOG_POST_LIST_START: &str = "<!-- BLOG-POST-LIST:START -->";
pub const BLOG_POST_LIST_END: &str = "<!-- BLOG-POST-LIST:END -->";

const BANNER_COLORS: &str = "customColorList=0,2,2,5,30";
const FALLBACK_BANNER_TEXT: &str = "GitHub Profile";
const FALLBACK_BIO: &str = "Passionate Developer";

/// One optional block of the document.
struct Section {
	name: &'static str,
	applies: fn(&ProfileConfig) -> bool,
	render: fn(&ProfileConfig, &mut dyn RngCore) -> String,
}

/// Document blocks in output order.
const SECTIONS: &[Section] = &[
	Section {
		name: "header",
		applies: always,
		render: render_header,
	},
	Section {
		name: "greeting",
		applies: |profile| present(&profile.user_name).is_some(),
		render: render_greeting,
	},
	Section {
		name: "intro",
		applies: always,
		render: render_intro,
	},
	Section {
		name: "about",
		applies: |profile| !about_badges(profile).is_empty(),
		render: render_about,
	},
	Section {
		name: "social",
		applies: |profile| profile.social.populated().next().is_some(),
		render: render_social,
	},
	Section {
		name: "skills",
		applies: |profile| !profile.skills.is_empty(),
		render: render_skills,
	},
	Section {
		name: "quote",
		applies: |profile| gated(profile.custom.show_quote, &profile.custom.quote).is_some(),
		render: render_quote,
	},
	Section {
		name: "education",
		applies: |profile| {
			gated(profile.achievements.show_education, &profile.achievements.education).is_some()
		},
		render: render_education,
	},
	Section {
		name: "certifications",
		applies: |profile| {
			gated(
				profile.achievements.show_certifications,
				&profile.achievements.certifications,
			)
			.is_some()
		},
		render: |profile, _| {
			render_list("📜 Certifications", &profile.achievements.certifications)
		},
	},
	Section {
		name: "awards",
		applies: |profile| gated(profile.achievements.show_awards, &profile.achievements.awards).is_some(),
		render: |profile, _| render_list("🏆 Awards & Recognition", &profile.achievements.awards),
	},
	Section {
		name: "fun_facts",
		applies: |profile| gated(profile.custom.show_fun_facts, &profile.custom.fun_facts).is_some(),
		render: |profile, _| render_list("⚡ Fun Facts", &profile.custom.fun_facts),
	},
	Section {
		name: "goals",
		applies: |profile| gated(profile.custom.show_goals, &profile.custom.goals).is_some(),
		render: |profile, _| render_list("🎯 Current Goals", &profile.custom.goals),
	},
	Section {
		name: "hobbies",
		applies: |profile| gated(profile.custom.show_hobbies, &profile.custom.hobbies).is_some(),
		render: |profile, _| render_list("🎨 Hobbies & Interests", &profile.custom.hobbies),
	},
	Section {
		name: "analytics",
		applies: analytics::applies,
		render: |profile, _| analytics::render(profile),
	},
	Section {
		name: "blog",
		applies: ProfileConfig::has_blog_feed,
		render: render_blog,
	},
	Section {
		name: "support",
		applies: |profile| !support_links(profile).is_empty(),
		render: render_support,
	},
	Section {
		name: "visitors",
		applies: |profile| profile.stats.show_visitors && profile.github_username().is_some(),
		render: render_visitors,
	},
	Section {
		name: "footer",
		applies: always,
		render: render_footer,
	},
	Section {
		name: "thanks",
		applies: always,
		render: render_thanks,
	},
];

/// Render the profile README using the thread-local random generator for
/// skill badge colors.
pub fn generate_markdown(profile: &ProfileConfig) -> String {
	generate_markdown_with_rng(profile, &mut rand::rng())
}

/// Render the profile README, drawing one skill badge color per skill from
/// `rng`. A seeded generator makes the output reproducible.
pub fn generate_markdown_with_rng(profile: &ProfileConfig, rng: &mut dyn RngCore) -> String {
	let mut markdown = String::new();
	let mut emitted = Vec::new();

	for section in SECTIONS {
		if (section.applies)(profile) {
			markdown.push_str(&(section.render)(profile, rng));
			emitted.push(section.name);
		}
	}

	debug!(sections = ?emitted, bytes = markdown.len(), "assembled profile readme");
	markdown
}

/// Render with colors fixed by `seed` when one is given, otherwise with
/// fresh colors.
pub fn generate_markdown_seeded(profile: &ProfileConfig, seed: Option<u64>) -> String {
	match seed {
		Some(seed) => generate_markdown_with_rng(profile, &mut StdRng::seed_from_u64(seed)),
		None => generate_markdown(profile),
	}
}

/// Names of the blocks that would be emitted for this profile, in output
/// order.
pub fn active_sections(profile: &ProfileConfig) -> Vec<&'static str> {
	SECTIONS
		.iter()
		.filter(|section| (section.applies)(profile))
		.map(|section| section.name)
		.collect()
}

/// Percent-encode a value placed inside a URL.
pub fn encode_component(value: &str) -> Cow<'_, str> {
	urlencoding::encode(value)
}

fn always(_: &ProfileConfig) -> bool {
	true
}

fn render_header(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let text = present(&profile.user_name).unwrap_or(FALLBACK_BANNER_TEXT);
	let desc = present(&profile.user_bio).unwrap_or_default();

	format!(
		"<div align=\"center\">\n<img width=\"100%\" height=\"300\" \
		 src=\"https://capsule-render.vercel.app/api?type=waving&color=gradient&{BANNER_COLORS}&height=300&section=header&text={}&fontSize=90&fontColor=fff&animation=fadeIn&fontAlignY=38&desc={}&descAlignY=51&descAlign=62\">\n</div>\n\n",
		encode_component(text),
		encode_component(desc),
	)
}

fn render_greeting(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let name = present(&profile.user_name).unwrap_or_default();
	let mut out = String::from("<div align=\"center\">\n");
	let _ = writeln!(
		out,
		"<h1><img src=\"https://readme-typing-svg.herokuapp.com?font=Fira+Code&size=75&duration=1500&pause=1000&multiline=true&width=1200&height=140&lines=Hi+👋,+I'm+{}\" alt=\"Typing SVG\" /></h1>",
		encode_component(name),
	);
	if let Some(pronouns) = present(&profile.pronouns) {
		let _ = writeln!(out, "<h3 style=\"color: #667eea;\">({pronouns})</h3>");
	}
	out.push_str("</div>\n\n");
	out
}

fn render_intro(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let bio = present(&profile.user_bio).unwrap_or(FALLBACK_BIO);
	let mut out = String::from("<div align=\"center\">\n");
	let _ = writeln!(
		out,
		"<img src=\"https://readme-typing-svg.herokuapp.com?font=Fira+Code&pause=1000&size=35&center=true&vCenter=true&width=1000&lines={}\" alt=\"Typing SVG\" />",
		encode_component(bio),
	);

	if let Some(location) = present(&profile.location) {
		let _ = writeln!(
			out,
			"<br/>\n<img src=\"https://img.shields.io/badge/📍_Location-{}-667eea?style=for-the-badge&labelColor=764ba2\" />",
			encode_component(location),
		);
	}

	if let Some(timezone) = gated(profile.custom.show_timezone, &profile.custom.timezone) {
		let _ = writeln!(
			out,
			"<br/>\n<img src=\"https://img.shields.io/badge/🕒_Timezone-{}-43e97b?style=for-the-badge&labelColor=38f9d7\" />",
			encode_component(timezone),
		);
	}

	out.push_str("</div>\n\n");
	out
}

/// A shields.io "about me" badge. `message` is encoded here; `link`, when
/// given, is appended as an encoded `link=` parameter.
fn about_badge(
	label: &str,
	message: &str,
	color: &str,
	logo: &str,
	label_color: &str,
	link: Option<&str>,
) -> String {
	let link = link
		.map(|link| format!("&link={}", encode_component(link)))
		.unwrap_or_default();

	format!(
		"<img src=\"https://img.shields.io/badge/{label}-{}-{color}?style=for-the-badge&logo={logo}&logoColor=white&labelColor={label_color}{link}\" />",
		encode_component(message),
	)
}

/// Split a `currentWork` line on its first pipe into a trimmed name and
/// link. Lines without a pipe have no link.
pub fn split_work_item(line: &str) -> (&str, Option<&str>) {
	match line.split_once('|') {
		Some((name, link)) => (name.trim(), Some(link.trim())),
		None => (line.trim(), None),
	}
}

fn about_badges(profile: &ProfileConfig) -> Vec<String> {
	let mut badges = Vec::new();

	for line in non_blank_lines(&profile.current_work) {
		let badge = match split_work_item(line) {
			(name, Some(link)) => {
				about_badge(
					"🔭_Currently_Working_On",
					name,
					"667eea",
					"github",
					"764ba2",
					Some(link),
				)
			}
			(name, None) => {
				about_badge(
					"🔭_Currently_Working_On",
					name,
					"667eea",
					"code",
					"764ba2",
					None,
				)
			}
		};
		badges.push(badge);
	}

	for line in non_blank_lines(&profile.current_learning) {
		badges.push(about_badge(
			"🌱_Currently_Learning",
			line,
			"43e97b",
			"book",
			"38f9d7",
			None,
		));
	}

	for line in non_blank_lines(&profile.ask_about) {
		badges.push(about_badge(
			"💬_Ask_Me_About",
			line,
			"f093fb",
			"chat",
			"f5576c",
			None,
		));
	}

	if let Some(email) = present(&profile.user_email) {
		badges.push(about_badge(
			"📫_Contact",
			email,
			"4facfe",
			"gmail",
			"00f2fe",
			None,
		));
	}

	if present(&profile.portfolio_url).is_some() {
		badges.push(
			"<img src=\"https://img.shields.io/badge/📄_Portfolio-View_My_Work-667eea?style=for-the-badge&logo=portfolio&logoColor=white&labelColor=764ba2\" />"
				.to_string(),
		);
	}

	if present(&profile.blog_url).is_some() {
		badges.push(
			"<img src=\"https://img.shields.io/badge/📝_Blog-Read_My_Articles-43e97b?style=for-the-badge&logo=blogger&logoColor=white&labelColor=38f9d7\" />"
				.to_string(),
		);
	}

	badges
}

fn render_about(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let mut out = String::from("<div align=\"center\">\n\n");
	for badge in about_badges(profile) {
		let _ = write!(out, "{badge}\n<br/>\n");
	}
	out.push_str("\n</div>\n\n");
	out
}

fn render_social(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let mut out = String::from("<div align=\"center\">\n<h2>🌐 Connect with me</h2>\n<br/>\n");

	for (platform, username) in profile.social.populated() {
		let encoded = encode_component(username);
		let _ = writeln!(
			out,
			"<a href=\"{url}{encoded}\" target=\"_blank\"><img src=\"https://img.shields.io/badge/{label}-{encoded}-{color}?style=for-the-badge&logo={key}&logoColor=white\" alt=\"{label}\" /></a>",
			url = platform.profile_url(),
			label = platform.label(),
			color = platform.color(),
			key = platform.key(),
		);
	}

	out.push_str("</div>\n\n");
	out
}

fn render_skills(profile: &ProfileConfig, rng: &mut dyn RngCore) -> String {
	let mut out = String::from("<div align=\"center\">\n<h2>🛠️ Languages and Tools</h2>\n<br/>\n<div>\n");

	for skill in &profile.skills {
		let color = SKILL_BADGE_COLORS[rng.random_range(0..SKILL_BADGE_COLORS.len())];
		let label = skill.badge_label();
		let _ = writeln!(
			out,
			"<img src=\"https://img.shields.io/badge/{}-{color}?style=for-the-badge&logo={}&logoColor=white\" alt=\"{label}\" />",
			encode_component(&label),
			encode_component(&skill.name),
		);
	}

	out.push_str("</div>\n</div>\n\n");

	let icons = profile
		.skills
		.iter()
		.map(|skill| encode_component(&skill.name))
		.collect::<Vec<_>>()
		.join(",");
	let _ = write!(
		out,
		"<div align=\"center\">\n<img src=\"https://skillicons.dev/icons?i={icons}&theme=dark\" alt=\"Skills\" />\n</div>\n\n"
	);
	out
}

fn render_quote(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let quote = gated(profile.custom.show_quote, &profile.custom.quote).unwrap_or_default();
	format!("<div align=\"center\">\n<blockquote>\n<h3>\"{quote}\"</h3>\n</blockquote>\n</div>\n\n")
}

fn render_education(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let education = gated(profile.achievements.show_education, &profile.achievements.education)
		.unwrap_or_default();
	format!("## 🎓 Education\n{education}\n\n")
}

/// A `##` heading followed by one list item per non-blank line.
fn render_list(heading: &str, text: &str) -> String {
	let mut out = format!("## {heading}\n");
	for item in non_blank_lines(text) {
		let _ = writeln!(out, "- {item}");
	}
	out.push('\n');
	out
}

fn render_blog(_: &ProfileConfig, _: &mut dyn RngCore) -> String {
	format!("### 📝 Latest Blog Posts\n{BLOG_POST_LIST_START}\n{BLOG_POST_LIST_END}\n\n")
}

fn support_links(profile: &ProfileConfig) -> Vec<String> {
	let mut links = Vec::new();

	if let Some(username) = present(&profile.buy_me_coffee_username) {
		links.push(format!(
			"<a href=\"https://www.buymeacoffee.com/{}\"><img src=\"https://cdn.buymeacoffee.com/buttons/v2/default-yellow.png\" height=\"50\" width=\"210\" alt=\"Buy Me A Coffee\" /></a>",
			encode_component(username),
		));
	}

	if let Some(url) = present(&profile.sponsor_url) {
		links.push(format!(
			"<a href=\"{url}\"><img src=\"https://img.shields.io/badge/Sponsor-❤️-red?style=for-the-badge\" alt=\"Sponsor\" /></a>"
		));
	}

	links
}

fn render_support(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	format!(
		"## ☕️ Support Me\n<div align=\"center\">\n{}\n</div>\n\n",
		support_links(profile).join("\n")
	)
}

fn render_visitors(profile: &ProfileConfig, _: &mut dyn RngCore) -> String {
	let username = profile.github_username().unwrap_or_default();
	format!(
		"<div align=\"center\">\n<img src=\"https://komarev.com/ghpvc/?username={}&label=Profile%20views&color=gradient&style=for-the-badge\" alt=\"{username}\" />\n</div>\n\n",
		encode_component(username),
	)
}

fn render_footer(_: &ProfileConfig, _: &mut dyn RngCore) -> String {
	format!(
		"<div align=\"center\">\n<img width=\"100%\" height=\"200\" \
		 src=\"https://capsule-render.vercel.app/api?type=waving&color=gradient&{BANNER_COLORS}&height=200&section=footer&animation=fadeIn\" />\n</div>\n\n"
	)
}

fn render_thanks(_: &ProfileConfig, _: &mut dyn RngCore) -> String {
	"<div align=\"center\">\n<h3>✨ Thanks for visiting my profile! ✨</h3>\n<img \
	 src=\"https://readme-typing-svg.herokuapp.com?font=Fira+Code&size=22&duration=3000&pause=1000&center=true&vCenter=true&width=600&lines=Let's+connect+and+build+something+amazing+together!\" \
	 alt=\"Typing SVG\" />\n</div>\n"
		.to_string()
}
