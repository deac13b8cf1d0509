//! The closed skill taxonomy offered when building a profile.
//!
//! Imported templates only carry a skill's identifier and category, so the
//! icon and display name are re-resolved from this table on import. Skills
//! that are not listed here are still accepted and rendered from whatever
//! fields they carry.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Bumped whenever an entry is added, removed, or renamed.
pub const TAXONOMY_VERSION: u32 = 1;

/// A selectable skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
	/// Identifier used for badge logos and the skill icon strip.
	pub name: &'static str,
	/// Devicon class name.
	pub icon: &'static str,
	pub display_name: &'static str,
}

const fn entry(name: &'static str, icon: &'static str, display_name: &'static str) -> TaxonomyEntry {
	TaxonomyEntry {
		name,
		icon,
		display_name,
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkillCategory {
	#[serde(rename = "Programming Languages")]
	ProgrammingLanguages,
	#[serde(rename = "Frontend Development")]
	Frontend,
	#[serde(rename = "Backend Development")]
	Backend,
	#[serde(rename = "Mobile App Development")]
	Mobile,
	#[serde(rename = "AI/ML")]
	AiMl,
	#[serde(rename = "Database")]
	Database,
	#[serde(rename = "DevOps")]
	DevOps,
	#[serde(rename = "Testing")]
	Testing,
	#[serde(rename = "Software & Tools")]
	Tools,
}

impl SkillCategory {
	/// Every category in display order.
	pub const ALL: [SkillCategory; 9] = [
		Self::ProgrammingLanguages,
		Self::Frontend,
		Self::Backend,
		Self::Mobile,
		Self::AiMl,
		Self::Database,
		Self::DevOps,
		Self::Testing,
		Self::Tools,
	];

	/// The label stored in a skill's `category` field.
	pub fn label(self) -> &'static str {
		match self {
			Self::ProgrammingLanguages => "Programming Languages",
			Self::Frontend => "Frontend Development",
			Self::Backend => "Backend Development",
			Self::Mobile => "Mobile App Development",
			Self::AiMl => "AI/ML",
			Self::Database => "Database",
			Self::DevOps => "DevOps",
			Self::Testing => "Testing",
			Self::Tools => "Software & Tools",
		}
	}

	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.label() == label)
	}

	pub fn entries(self) -> &'static [TaxonomyEntry] {
		match self {
			Self::ProgrammingLanguages => PROGRAMMING_LANGUAGES,
			Self::Frontend => FRONTEND,
			Self::Backend => BACKEND,
			Self::Mobile => MOBILE,
			Self::AiMl => AI_ML,
			Self::Database => DATABASE,
			Self::DevOps => DEVOPS,
			Self::Testing => TESTING,
			Self::Tools => TOOLS,
		}
	}
}

impl fmt::Display for SkillCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Find a taxonomy entry by identifier, searching categories in display
/// order. Identifiers are unique across the whole taxonomy.
pub fn find_skill(name: &str) -> Option<(SkillCategory, &'static TaxonomyEntry)> {
	SkillCategory::ALL.into_iter().find_map(|category| {
		category
			.entries()
			.iter()
			.find(|entry| entry.name == name)
			.map(|entry| (category, entry))
	})
}

/// Iterate every entry together with its category.
pub fn all_skills() -> impl Iterator<Item = (SkillCategory, &'static TaxonomyEntry)> {
	SkillCategory::ALL
		.into_iter()
		.flat_map(|category| category.entries().iter().map(move |entry| (category, entry)))
}

const PROGRAMMING_LANGUAGES: &[TaxonomyEntry] = &[
	entry("javascript", "devicon-javascript-plain", "JavaScript"),
	entry("typescript", "devicon-typescript-plain", "TypeScript"),
	entry("python", "devicon-python-plain", "Python"),
	entry("java", "devicon-java-plain", "Java"),
	entry("cplusplus", "devicon-cplusplus-plain", "C++"),
	entry("csharp", "devicon-csharp-plain", "C#"),
	entry("php", "devicon-php-plain", "PHP"),
	entry("swift", "devicon-swift-plain", "Swift"),
	entry("kotlin", "devicon-kotlin-plain", "Kotlin"),
	entry("go", "devicon-go-plain", "Go"),
	entry("rust", "devicon-rust-plain", "Rust"),
	entry("ruby", "devicon-ruby-plain", "Ruby"),
];

const FRONTEND: &[TaxonomyEntry] = &[
	entry("react", "devicon-react-original", "React"),
	entry("angular", "devicon-angularjs-plain", "Angular"),
	entry("vuejs", "devicon-vuejs-plain", "Vue.js"),
	entry("nextjs", "devicon-nextjs-original", "Next.js"),
	entry("svelte", "devicon-svelte-plain", "Svelte"),
	entry("html5", "devicon-html5-plain", "HTML5"),
	entry("css3", "devicon-css3-plain", "CSS3"),
	entry("tailwindcss", "devicon-tailwindcss-plain", "Tailwind CSS"),
	entry("bootstrap", "devicon-bootstrap-plain", "Bootstrap"),
];

const BACKEND: &[TaxonomyEntry] = &[
	entry("nodejs", "devicon-nodejs-plain", "Node.js"),
	entry("express", "devicon-express-original", "Express"),
	entry("django", "devicon-django-plain", "Django"),
	entry("flask", "devicon-flask-original", "Flask"),
	entry("laravel", "devicon-laravel-plain", "Laravel"),
	entry("spring", "devicon-spring-plain", "Spring Boot"),
	entry("fastapi", "devicon-fastapi-plain", "FastAPI"),
];

const MOBILE: &[TaxonomyEntry] = &[
	entry("react-native", "devicon-react-original", "React Native"),
	entry("flutter", "devicon-flutter-plain", "Flutter"),
	entry("ionic", "devicon-ionic-original", "Ionic"),
];

const AI_ML: &[TaxonomyEntry] = &[
	entry("tensorflow", "devicon-tensorflow-original", "TensorFlow"),
	entry("pytorch", "devicon-pytorch-original", "PyTorch"),
	entry("scikit-learn", "devicon-scikitlearn-plain", "Scikit-learn"),
	entry("pandas", "devicon-pandas-original", "Pandas"),
	entry("numpy", "devicon-numpy-original", "NumPy"),
];

const DATABASE: &[TaxonomyEntry] = &[
	entry("mongodb", "devicon-mongodb-plain", "MongoDB"),
	entry("postgresql", "devicon-postgresql-plain", "PostgreSQL"),
	entry("mysql", "devicon-mysql-plain", "MySQL"),
	entry("sqlite", "devicon-sqlite-plain", "SQLite"),
	entry("firebase", "devicon-firebase-plain", "Firebase"),
	entry("redis", "devicon-redis-plain", "Redis"),
];

const DEVOPS: &[TaxonomyEntry] = &[
	entry("docker", "devicon-docker-plain", "Docker"),
	entry("kubernetes", "devicon-kubernetes-plain", "Kubernetes"),
	entry("jenkins", "devicon-jenkins-line", "Jenkins"),
	entry("github-actions", "devicon-github-original", "GitHub Actions"),
	entry("terraform", "devicon-terraform-plain", "Terraform"),
	entry("aws", "devicon-amazonwebservices-original", "AWS"),
];

const TESTING: &[TaxonomyEntry] = &[
	entry("jest", "devicon-jest-plain", "Jest"),
	entry("cypress", "devicon-cypress-plain", "Cypress"),
	entry("selenium", "devicon-selenium-original", "Selenium"),
];

const TOOLS: &[TaxonomyEntry] = &[
	entry("git", "devicon-git-plain", "Git"),
	entry("vscode", "devicon-vscode-plain", "VS Code"),
	entry("figma", "devicon-figma-plain", "Figma"),
	entry("postman", "devicon-postman-plain", "Postman"),
];
