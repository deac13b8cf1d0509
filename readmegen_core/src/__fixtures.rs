use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::ProfileConfig;
use crate::taxonomy::find_skill;

pub fn seeded() -> StdRng {
	StdRng::seed_from_u64(42)
}

pub fn render(profile: &ProfileConfig) -> String {
	crate::generate_markdown_with_rng(profile, &mut seeded())
}

pub fn ada() -> ProfileConfig {
	let mut profile = ProfileConfig::default();
	profile.user_name = "Ada".to_string();
	profile.social.github = "ada".to_string();
	profile
}

/// A profile with every group populated.
pub fn full_profile() -> ProfileConfig {
	let mut profile = ada();
	profile.user_bio = "Engines & analytics".to_string();
	profile.pronouns = "she/her".to_string();
	profile.location = "London, UK".to_string();
	profile.current_work = "Analytical Engine | https://example.com/engine?v=1&lang=en\nNotes".to_string();
	profile.current_learning = "Rust\n\nWebAssembly".to_string();
	profile.ask_about = "Bernoulli numbers".to_string();
	profile.user_email = "ada@example.com".to_string();
	profile.portfolio_url = "https://ada.dev".to_string();
	profile.blog_url = "https://ada.dev/blog".to_string();
	profile.social.linkedin = "ada-lovelace".to_string();
	profile.social.devto = "ada".to_string();
	profile.social.medium = "ada".to_string();

	for name in ["rust", "react-native", "go"] {
		let (category, entry) = find_skill(name).unwrap_or_else(|| panic!("`{name}` is listed"));
		profile.toggle_skill(entry, category);
	}

	profile.stats.show_stats = true;
	profile.stats.show_languages = true;
	profile.stats.show_streak = true;
	profile.stats.show_trophy = true;
	profile.stats.show_visitors = true;
	profile.blog.show_devto_posts = true;
	profile.blog.show_rss_posts = true;
	profile.blog.rss_url = "https://ada.dev/feed.xml".to_string();
	profile.buy_me_coffee_username = "ada".to_string();
	profile.sponsor_url = "https://github.com/sponsors/ada".to_string();
	profile.achievements.show_education = true;
	profile.achievements.education = "University of London".to_string();
	profile.achievements.show_certifications = true;
	profile.achievements.certifications = "AWS & GCP\nCKA".to_string();
	profile.custom.show_quote = true;
	profile.custom.quote = "That brain of mine is something more than merely mortal".to_string();
	profile.custom.show_timezone = true;
	profile.custom.timezone = "UTC+0".to_string();
	profile.custom.show_goals = true;
	profile.custom.goals = "Ship the engine".to_string();
	profile
}
