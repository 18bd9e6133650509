//! Path segment grammar and effective-path matching.
//!
//! Descriptor paths are relative segments such as `sql-review`, `new`,
//! `:sqlReviewPolicySlug` or `users/:principalEmail`. The empty path means
//! "render here, no added segment". Effective paths are the
//! `/`-concatenation of the non-empty paths along the ancestor chain.

use crate::error::{ConfigResult, ConfigurationError};
use std::collections::HashMap;

/// Delimiter between path segments.
pub const DELIMITER: char = '/';

/// Marker introducing a positional parameter segment.
pub const PARAM_MARKER: char = ':';

/// Maximum allowed length for an effective path pattern in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of segments in an effective path.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled matcher (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// One parsed path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Matched exactly.
	Literal(String),
	/// Captures one non-empty segment under the given name.
	Param(String),
}

impl std::fmt::Display for Segment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Literal(text) => write!(f, "{}", text),
			Self::Param(name) => write!(f, "{}{}", PARAM_MARKER, name),
		}
	}
}

/// Parses a descriptor's own path into segments.
///
/// # Errors
///
/// Returns [`ConfigurationError::MalformedPath`] for a leading or trailing
/// delimiter, an empty segment, a bare or invalid parameter marker, or a
/// literal containing reserved characters.
pub fn parse_segments(path: &str) -> ConfigResult<Vec<Segment>> {
	if path.is_empty() {
		return Ok(Vec::new());
	}

	let malformed = |reason: &str| ConfigurationError::MalformedPath {
		path: path.to_string(),
		reason: reason.to_string(),
	};

	if path.starts_with(DELIMITER) || path.ends_with(DELIMITER) {
		return Err(malformed("leading or trailing delimiter"));
	}

	path.split(DELIMITER)
		.map(|raw| {
			if raw.is_empty() {
				return Err(malformed("empty segment"));
			}
			if let Some(name) = raw.strip_prefix(PARAM_MARKER) {
				if name.is_empty() {
					return Err(malformed("unterminated parameter marker"));
				}
				if !is_identifier(name) {
					return Err(malformed(&format!("invalid parameter name '{}'", name)));
				}
				return Ok(Segment::Param(name.to_string()));
			}
			if raw
				.chars()
				.any(|c| c == PARAM_MARKER || c == '?' || c == '#' || c.is_whitespace())
			{
				return Err(malformed(&format!("invalid character in segment '{}'", raw)));
			}
			Ok(Segment::Literal(raw.to_string()))
		})
		.collect()
}

fn is_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Strips leading and trailing delimiters from an incoming path.
pub fn normalize(path: &str) -> &str {
	path.trim_matches(DELIMITER)
}

/// A compiled effective path.
///
/// # Examples
///
/// ```
/// use waypost_routes::path::{PathPattern, parse_segments};
///
/// let segments = parse_segments("sql-review/:slug").unwrap();
/// let pattern = PathPattern::compile(&segments).unwrap();
///
/// let params = pattern.matches("sql-review/prod").unwrap();
/// assert_eq!(params.get("slug"), Some(&"prod".to_string()));
/// assert!(pattern.matches("sql-review").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The effective path as written (`sql-review/:slug`).
	pattern: String,
	/// Parsed segments in order.
	segments: Vec<Segment>,
	/// Compiled matcher.
	regex: regex::Regex,
	/// Parameter names in order.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles an effective path from its full segment list.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::MalformedPath`] when the path exceeds the
	/// length or segment limits, and [`ConfigurationError::DuplicateParameter`]
	/// when a parameter name repeats.
	pub fn compile(segments: &[Segment]) -> ConfigResult<Self> {
		let pattern = segments
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(&DELIMITER.to_string());

		let malformed = |reason: String| ConfigurationError::MalformedPath {
			path: pattern.clone(),
			reason,
		};

		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(malformed(format!(
				"length {} exceeds maximum allowed length of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			)));
		}
		if segments.len() > MAX_PATH_SEGMENTS {
			return Err(malformed(format!(
				"{} segments exceed maximum of {}",
				segments.len(),
				MAX_PATH_SEGMENTS
			)));
		}

		let mut param_names: Vec<String> = Vec::new();
		let mut parts = Vec::with_capacity(segments.len());
		for segment in segments {
			match segment {
				Segment::Literal(text) => parts.push(regex::escape(text)),
				Segment::Param(name) => {
					if param_names.contains(name) {
						return Err(ConfigurationError::DuplicateParameter {
							path: pattern.clone(),
							param: name.clone(),
						});
					}
					param_names.push(name.clone());
					parts.push(format!("(?P<{}>[^/]+)", name));
				}
			}
		}

		let regex_str = format!("^{}$", parts.join("/"));
		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| malformed(format!("failed to compile matcher: {}", e)))?;

		Ok(Self {
			pattern,
			segments: segments.to_vec(),
			regex,
			param_names,
		})
	}

	/// Returns the effective path as written.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parsed segments.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns the parameter names in order of appearance.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this pattern has no parameters.
	pub fn is_exact(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Checks if this pattern would match the given (normalized) path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(normalize(path))
	}

	/// Matches a path and extracts percent-decoded parameter values.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		self.regex.captures(normalize(path)).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name).map(|m| {
						let value = urlencoding::decode(m.as_str())
							.map(|v| v.into_owned())
							.unwrap_or_else(|_| m.as_str().to_string());
						(name.clone(), value)
					})
				})
				.collect()
		})
	}

	/// Builds a concrete path from parameter values.
	///
	/// Values are percent-encoded. Returns the name of the first parameter
	/// with no (or an empty) value as the error.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, String> {
		let mut parts = Vec::with_capacity(self.segments.len());
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => parts.push(text.clone()),
				Segment::Param(name) => match params.get(name) {
					Some(value) if !value.is_empty() => {
						parts.push(urlencoding::encode(value).into_owned())
					}
					_ => return Err(name.clone()),
				},
			}
		}
		Ok(parts.join("/"))
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
