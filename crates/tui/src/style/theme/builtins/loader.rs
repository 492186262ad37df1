use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration, normalize_name};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
	pub(super) default_name: String,
}

/// One bundled theme file.
#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleEntry,
	border: StyleEntry,
	row_highlight: StyleEntry,
	prompt: StyleEntry,
	empty: StyleEntry,
	highlight: StyleEntry,
	footer: StyleEntry,
}

impl From<ThemeStyles> for Theme {
	fn from(styles: ThemeStyles) -> Self {
		Theme {
			header: styles.header.0,
			border: styles.border.0,
			row_highlight: styles.row_highlight.0,
			prompt: styles.prompt.0,
			empty: styles.empty.0,
			highlight: styles.highlight.0,
			footer: styles.footer.0,
		}
	}
}

/// A style table (`fg`, `bg`, `modifiers`) checked while deserializing.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawStyle")]
struct StyleEntry(Style);

#[derive(Debug, Default, Deserialize)]
struct RawStyle {
	fg: Option<String>,
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl TryFrom<RawStyle> for StyleEntry {
	type Error = anyhow::Error;

	fn try_from(raw: RawStyle) -> Result<Self> {
		let mut style = Style::new();
		if let Some(fg) = &raw.fg {
			style = style.fg(parse_color(fg)?);
		}
		if let Some(bg) = &raw.bg {
			style = style.bg(parse_color(bg)?);
		}
		for modifier in &raw.modifiers {
			style = style.add_modifier(parse_modifier(modifier)?);
		}
		Ok(Self(style))
	}
}

/// Colour names, `#rrggbb` and 256-colour indices, as ratatui reads them.
fn parse_color(input: &str) -> Result<Color> {
	input
		.trim()
		.parse()
		.map_err(|_| anyhow!("unknown colour `{input}`"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalize_name(input).as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" => Ok(Modifier::REVERSED),
		_ => bail!("unknown modifier `{input}`"),
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default_index = None;
	for file in files {
		let theme = read_theme_file(file)?;
		if theme.default && default_index.replace(registrations.len()).is_some() {
			bail!("more than one built-in theme is marked as default");
		}
		let registration = theme
			.aliases
			.into_iter()
			.fold(ThemeRegistration::new(theme.name, theme.styles.into()), ThemeRegistration::alias);
		registrations.push(registration);
	}

	let default = registrations
		.get(default_index.unwrap_or(0))
		.context("no built-in theme definitions were found")?;
	let default_theme = default.theme;
	let default_name = default.name.clone();

	Ok(BuiltinThemes {
		registrations,
		default_theme,
		default_name,
	})
}

fn read_theme_file(file: &File) -> Result<ThemeFile> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	toml::from_str(contents).with_context(|| format!("invalid built-in theme {path:?}"))
}
