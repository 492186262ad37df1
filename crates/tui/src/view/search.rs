use frizbee::{Config, match_list};

/// Lowercased search terms for substring matching.
pub(crate) fn terms(query: &str) -> Vec<String> {
	query.split_whitespace().map(str::to_lowercase).collect()
}

/// Whether every term occurs in the row text.
///
/// `haystack` is the row's cells joined by newlines and already lowercased.
/// Terms never contain whitespace, so a term cannot straddle two cells.
pub(crate) fn matches_all_terms(haystack: &str, terms: &[String]) -> bool {
	terms.iter().all(|term| haystack.contains(term.as_str()))
}

/// Fuzzy-score rows and return `(row, score)` for every match, best first.
///
/// Ties keep the order of `haystacks`.
pub(crate) fn fuzzy_rank(query: &str, haystacks: &[String]) -> Vec<(usize, u16)> {
	let needle = query.trim();
	if needle.is_empty() {
		return (0..haystacks.len()).map(|index| (index, 0)).collect();
	}

	let config = Config {
		max_typos: Some(0),
		sort: false,
		..Config::default()
	};
	let refs: Vec<&str> = haystacks.iter().map(String::as_str).collect();

	let mut ranked: Vec<(usize, u16)> = match_list(needle, &refs, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.index as usize, entry.score))
		.collect();
	ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	ranked
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn terms_are_lowercased_and_split() {
		assert_eq!(terms("  Disk  FULL "), vec!["disk", "full"]);
		assert!(terms("   ").is_empty());
	}

	#[test]
	fn every_term_must_match() {
		let row = "2024-01-01\nwarn\ndisk almost full";
		assert!(matches_all_terms(row, &terms("WARN disk")));
		assert!(!matches_all_terms(row, &terms("warn network")));
		assert!(matches_all_terms(row, &[]));
	}

	#[test]
	fn fuzzy_keeps_only_matching_rows() {
		let rows = vec![
			"connection reset".to_string(),
			"disk full".to_string(),
			"connection refused".to_string(),
		];
		let ranked = fuzzy_rank("conn", &rows);
		let indices: Vec<usize> = ranked.iter().map(|(index, _)| *index).collect();

		assert!(indices.contains(&0));
		assert!(indices.contains(&2));
		assert!(!indices.contains(&1));
	}

	#[test]
	fn blank_fuzzy_query_keeps_everything_in_order() {
		let rows = vec!["b".to_string(), "a".to_string()];
		assert_eq!(fuzzy_rank(" ", &rows), vec![(0, 0), (1, 0)]);
	}
}
