//! Start-case title transform.

/// Converts a string to start case: words are split on any non-alphanumeric
/// character and on lower-to-upper / letter-to-digit case boundaries, each
/// word's first letter is upper-cased, and words are joined by one space.
///
/// Apostrophes join the letters around them, and accented Latin-1 letters
/// and combining marks are folded to their ASCII base before splitting.
///
/// ```
/// use waypost_i18n::start_case;
///
/// assert_eq!(start_case("review center"), "Review Center");
/// assert_eq!(start_case("schema-template"), "Schema Template");
/// assert_eq!(start_case("slowQuery"), "Slow Query");
/// assert_eq!(start_case("centre d'export"), "Centre Dexport");
/// ```
pub fn start_case(input: &str) -> String {
	words(&deburr(input))
		.into_iter()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

fn deburr(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'\'' | '\u{2019}' | '\u{0300}'..='\u{036f}' => {}
			_ => match fold_latin1(c) {
				Some(base) => out.push_str(base),
				None => out.push(c),
			},
		}
	}
	out
}

fn fold_latin1(c: char) -> Option<&'static str> {
	let base = match c {
		'À'..='Å' => "A",
		'à'..='å' => "a",
		'Ç' => "C",
		'ç' => "c",
		'Ð' => "D",
		'ð' => "d",
		'È'..='Ë' => "E",
		'è'..='ë' => "e",
		'Ì'..='Ï' => "I",
		'ì'..='ï' => "i",
		'Ñ' => "N",
		'ñ' => "n",
		'Ò'..='Ö' | 'Ø' => "O",
		'ò'..='ö' | 'ø' => "o",
		'Ù'..='Ü' => "U",
		'ù'..='ü' => "u",
		'Ý' => "Y",
		'ý' | 'ÿ' => "y",
		'Æ' => "Ae",
		'æ' => "ae",
		'Þ' => "Th",
		'þ' => "th",
		'ß' => "ss",
		_ => return None,
	};
	Some(base)
}

fn words(input: &str) -> Vec<String> {
	let mut words = Vec::new();
	let mut current = String::new();
	let mut prev: Option<char> = None;
	let chars: Vec<char> = input.chars().collect();

	for (i, &c) in chars.iter().enumerate() {
		if !c.is_alphanumeric() {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
			prev = None;
			continue;
		}
		if let Some(p) = prev {
			let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			let boundary = (p.is_lowercase() && c.is_uppercase())
				|| (p.is_uppercase() && c.is_uppercase() && next_is_lower)
				|| (p.is_alphabetic() && c.is_numeric())
				|| (p.is_numeric() && c.is_alphabetic());
			if boundary && !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
		}
		current.push(c);
		prev = Some(c);
	}
	if !current.is_empty() {
		words.push(current);
	}
	words
}
