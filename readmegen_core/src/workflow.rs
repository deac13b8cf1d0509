use crate::profile::BlogConfig;
use crate::profile::ProfileConfig;
use crate::profile::present;

/// Where the workflow is expected to live in the profile repository.
pub const WORKFLOW_FILE_PATH: &str = ".github/workflows/blog-post-workflow.yml";

/// Feed URLs for every enabled source, in the order dev.to, Medium, RSS.
/// Sources that are disabled or missing their username/URL are skipped.
pub fn feed_list(
	blog: &BlogConfig,
	devto_username: Option<&str>,
	medium_username: Option<&str>,
) -> Vec<String> {
	let mut feeds = Vec::new();

	if blog.show_devto_posts {
		if let Some(username) = devto_username.and_then(present) {
			feeds.push(format!("https://dev.to/feed/{username}"));
		}
	}

	if blog.show_medium_posts {
		if let Some(username) = medium_username.and_then(present) {
			feeds.push(format!("https://medium.com/feed/@{username}"));
		}
	}

	if blog.show_rss_posts {
		if let Some(url) = present(&blog.rss_url) {
			feeds.push(url.to_string());
		}
	}

	feeds
}

/// Render the blog-post GitHub Actions workflow. An empty feed list still
/// produces a complete workflow.
pub fn generate_workflow(
	blog: &BlogConfig,
	devto_username: Option<&str>,
	medium_username: Option<&str>,
) -> String {
	let feeds = feed_list(blog, devto_username, medium_username).join(",");

	format!(
		r#"name: Latest blog post workflow
on:
  schedule: # Run workflow automatically
    - cron: '0 * * * *' # Runs every hour, on the hour
  workflow_dispatch: # Run workflow manually (without waiting for the cron to be called), through the GitHub Actions Workflow page directly

jobs:
  update-readme-with-blog:
    name: Update this repo's README with latest blog posts
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v3
      - name: Pull in blog posts
        uses: gautamkrishnar/blog-post-workflow@v1
        with:
          comment_tag_name: "BLOG-POST-LIST"
          feed_list: "{feeds}"
          max_post_count: 5
          template: "- [$title]($url)""#
	)
}

/// Render the workflow using the profile's dev.to and Medium usernames.
pub fn workflow_for_profile(profile: &ProfileConfig) -> String {
	generate_workflow(
		&profile.blog,
		Some(profile.social.devto.as_str()),
		Some(profile.social.medium.as_str()),
	)
}
