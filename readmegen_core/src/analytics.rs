//! GitHub analytics cards.
//!
//! Every card needs a GitHub username. The cluster heading is only written
//! when at least one card is enabled.

use crate::document::encode_component;
use crate::profile::ProfileConfig;
use crate::profile::StatsConfig;
use crate::profile::present;

/// Values shared by every card URL.
struct CardContext<'a> {
	/// Already percent-encoded.
	username: &'a str,
	/// Raw, for `alt` text.
	alt: &'a str,
	stats_theme: String,
	languages_theme: String,
	stats: &'a StatsConfig,
}

struct AnalyticsBlock {
	name: &'static str,
	enabled: fn(&StatsConfig) -> bool,
	render: fn(&CardContext<'_>) -> String,
}

const ANALYTICS_BLOCKS: &[AnalyticsBlock] = &[
	AnalyticsBlock {
		name: "stats",
		enabled: |stats| stats.show_stats,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-stats.vercel.app/api?username={}&show_icons=true&locale=en{}&hide_border=true&bg_color=0D1117&title_color=58A6FF&text_color=C9D1D9&icon_color=F0883E\" alt=\"{}\" />",
				ctx.username, ctx.stats_theme, ctx.alt
			))
		},
	},
	AnalyticsBlock {
		name: "languages",
		enabled: |stats| stats.show_languages,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-stats.vercel.app/api/top-langs?username={}&show_icons=true&locale=en&layout=compact{}&hide_border=true&bg_color=0D1117&title_color=58A6FF&text_color=C9D1D9\" alt=\"{}\" />",
				ctx.username, ctx.languages_theme, ctx.alt
			))
		},
	},
	AnalyticsBlock {
		name: "streak",
		enabled: |stats| stats.show_streak,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-streak-stats.herokuapp.com/?user={}{}&hide_border=true&background=0D1117&ring=58A6FF&fire=F0883E&currStreakLabel=C9D1D9\" alt=\"{}\" />",
				ctx.username, ctx.stats_theme, ctx.alt
			))
		},
	},
	AnalyticsBlock {
		name: "activity",
		enabled: |stats| stats.show_activity,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-activity-graph.vercel.app/graph?username={}{}&hide_border=true&area=true&bg_color=0D1117&color=58A6FF&line=F0883E&point=C9D1D9\" alt=\"{}\" />",
				ctx.username, ctx.stats_theme, ctx.alt
			))
		},
	},
	AnalyticsBlock {
		name: "metrics",
		enabled: |stats| stats.show_metrics,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://metrics.lecoq.io/{}?template=classic&base.header=0&base.activity=0&base.community=0&base.repositories=0&base.metadata=0&languages=1&lines=1&habits=1&followup=1&people=1&config.timezone=America%2FNew_York\" alt=\"Metrics\" />",
				ctx.username
			))
		},
	},
	AnalyticsBlock {
		name: "productivity",
		enabled: |stats| stats.show_productivity_stats,
		render: |ctx| {
			let base = "https://github-profile-summary-cards.vercel.app/api/cards";
			let user = ctx.username;
			centered(&format!(
				"<img src=\"{base}/profile-details?username={user}&theme=github_dark\" alt=\"Profile Details\" />\n<br/><br/>\n<img src=\"{base}/repos-per-language?username={user}&theme=github_dark\" alt=\"Repos per Language\" />\n<img src=\"{base}/most-commit-language?username={user}&theme=github_dark\" alt=\"Most Commit Language\" />"
			))
		},
	},
	AnalyticsBlock {
		name: "commit_graph",
		enabled: |stats| stats.show_commit_graph,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-stats.vercel.app/api?username={}&show_icons=true&count_private=true&hide_rank=true&custom_title=My%20GitHub%20Stats&disable_animations=false&theme=vision-friendly-dark\" alt=\"3D Stats\" />",
				ctx.username
			))
		},
	},
	AnalyticsBlock {
		name: "summary_card",
		enabled: |stats| stats.show_summary_card,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-profile-summary-cards.vercel.app/api/cards/profile-details?username={}&theme=monokai\" alt=\"Summary Card\" />",
				ctx.username
			))
		},
	},
	AnalyticsBlock {
		name: "detailed_stats",
		enabled: |stats| stats.show_detailed_stats,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-stats.vercel.app/api?username={}&show_icons=true&count_private=true&include_all_commits=true&line_height=20&title_color=7A7ADB&icon_color=2234AE&text_color=D3D3D3&bg_color=0,000000,130F40\" alt=\"Detailed Stats\" />",
				ctx.username
			))
		},
	},
	AnalyticsBlock {
		name: "wakatime",
		enabled: |stats| stats.show_waka_time && present(&stats.waka_time_username).is_some(),
		render: |ctx| {
			let waka = present(&ctx.stats.waka_time_username).unwrap_or_default();
			centered(&format!(
				"<h3>⏰ Weekly Development Breakdown</h3>\n<img src=\"https://github-readme-stats.vercel.app/api/wakatime?username={}{}&hide_border=true&bg_color=0D1117&title_color=58A6FF&text_color=C9D1D9\" alt=\"WakaTime Stats\" />",
				encode_component(waka),
				ctx.stats_theme
			))
		},
	},
	AnalyticsBlock {
		name: "codetime",
		enabled: |stats| stats.show_codetime,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-readme-stats.vercel.app/api/pin/?username={}&repo=github-readme-stats&theme=dark&show_owner=true\" alt=\"Coding Time\" />",
				ctx.username
			))
		},
	},
	AnalyticsBlock {
		name: "trophies",
		enabled: |stats| stats.show_trophy,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://github-profile-trophy.vercel.app/?username={}&theme=darkhub&no-frame=true&no-bg=false&margin-w=4&row=2&column=4\" alt=\"{}\" />",
				ctx.username, ctx.alt
			))
		},
	},
	AnalyticsBlock {
		name: "snake",
		enabled: |stats| stats.show_contributions,
		render: |ctx| {
			centered(&format!(
				"<img src=\"https://raw.githubusercontent.com/{user}/{user}/output/github-contribution-grid-snake-dark.svg\" alt=\"Snake animation\" />",
				user = ctx.username
			))
		},
	},
];

fn centered(inner: &str) -> String {
	format!("<div align=\"center\">\n{inner}\n</div>\n\n")
}

/// Names of the enabled analytics cards, in output order.
pub fn enabled_cards(profile: &ProfileConfig) -> Vec<&'static str> {
	if profile.github_username().is_none() {
		return Vec::new();
	}

	ANALYTICS_BLOCKS
		.iter()
		.filter(|block| (block.enabled)(&profile.stats))
		.map(|block| block.name)
		.collect()
}

pub(crate) fn applies(profile: &ProfileConfig) -> bool {
	!enabled_cards(profile).is_empty()
}

pub(crate) fn render(profile: &ProfileConfig) -> String {
	let Some(username) = profile.github_username() else {
		return String::new();
	};

	let encoded = encode_component(username);
	let ctx = CardContext {
		username: &encoded,
		alt: username,
		stats_theme: profile.stats.stats_theme.query(),
		languages_theme: profile.stats.languages_theme.query(),
		stats: &profile.stats,
	};

	let mut out = String::from(
		"<div align=\"center\">\n<h2>📊 GitHub Analytics & Statistics</h2>\n<br/>\n</div>\n\n",
	);
	for block in ANALYTICS_BLOCKS {
		if (block.enabled)(&profile.stats) {
			out.push_str(&(block.render)(&ctx));
		}
	}
	out
}
