mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Names of the bundled themes, default first.
#[must_use]
pub fn names() -> Vec<String> {
	let default = builtins::default_name();
	let mut names: Vec<String> = builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.filter(|name| name != default)
		.collect();
	names.insert(0, default.to_string());
	names
}

/// Look up a bundled theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::registrations()
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		let names = names();
		assert_eq!(names.first().map(String::as_str), Some("slate"));
		assert!(names.iter().any(|name| name == "solarized"));
		assert!(names.iter().any(|name| name == "light"));
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Dark"), Some(default_theme()));
		assert!(by_name("solarized_dark").is_some());
		assert!(by_name("neon").is_none());
	}
}
