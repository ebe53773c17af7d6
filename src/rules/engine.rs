use crate::config::{Options, Unique};
use crate::error::Result;
use crate::rules::pattern::{CompiledPattern, splice};
use crate::rules::table::{RULES, Rule};

/// State carried from rule to rule while `unique` mode is on.
///
/// Only rules that matched at least once advance it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueState {
	/// Replacement of the last rule that matched, before any suffix.
	pub last: Option<&'static str>,

	/// Index handed to the next repeat of `last`.
	pub counter: usize,
}

impl UniqueState {
	/// Feed one matching rule through the state machine.
	///
	/// Returns the next state and the replacement to emit for this rule.
	pub fn step(self, replacement: &'static str, unique: &Unique) -> (Self, String) {
		if self.last == Some(replacement) {
			let emitted = match unique.suffix(self.counter) {
				Some(suffix) => format!("{replacement}{suffix}"),
				None => replacement.to_string(),
			};
			let next = UniqueState {
				last: self.last,
				counter: self.counter + 1,
			};
			(next, emitted)
		} else {
			let next = UniqueState {
				last: Some(replacement),
				counter: 0,
			};
			(next, replacement.to_string())
		}
	}
}

/// A rule with its pattern compiled for one invocation.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	pub rule: Rule,
	pub pattern: CompiledPattern,
}

/// Applies the rule table to text, one global pass per rule.
#[derive(Debug, Clone)]
pub struct Transliterator {
	rules: Vec<CompiledRule>,
	prefix: String,
	suffix: String,
	unique: Unique,
}

impl Transliterator {
	/// Compile the built-in rule table under `options`.
	pub fn new(options: &Options) -> Result<Self> {
		Self::with_rules(RULES, options)
	}

	/// Compile a custom rule table under `options`.
	pub fn with_rules(rules: &[Rule], options: &Options) -> Result<Self> {
		options.unique.validate()?;

		let ignore_chars = options.ignore_chars.as_deref().filter(|c| !c.is_empty());
		let rules = rules
			.iter()
			.map(|rule| {
				Ok(CompiledRule {
					rule: *rule,
					pattern: CompiledPattern::compile(rule.pattern, ignore_chars)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Transliterator {
			rules,
			prefix: options.prefix.clone(),
			suffix: options.suffix.clone(),
			unique: options.unique.clone(),
		})
	}

	/// Run every rule over the whole text, in table order.
	pub fn transform(&self, text: &str) -> String {
		let (text, _) = self.rules.iter().fold(
			(text.to_string(), UniqueState::default()),
			|(text, state), compiled| {
				let matches = compiled.pattern.find_all(&text);
				if matches.is_empty() {
					return (text, state);
				}

				let (state, replacement) = if self.unique.is_enabled() {
					state.step(compiled.rule.replacement, &self.unique)
				} else {
					(state, compiled.rule.replacement.to_string())
				};

				log::trace!(
					"{} -> {} ({} matches)",
					compiled.pattern.as_str(),
					replacement,
					matches.len()
				);

				let wrapped = format!("{}{}{}", self.prefix, replacement, self.suffix);
				(splice(&text, &matches, &wrapped), state)
			},
		);

		text
	}
}

/// One-shot transform of `text` under `options`.
pub fn transform(text: &str, options: &Options) -> Result<String> {
	Ok(Transliterator::new(options)?.transform(text))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn greeklish(text: &str, options: &Options) -> String {
		transform(text, options).unwrap()
	}

	#[test]
	fn test_sentence_default_options() {
		assert_eq!(
			greeklish("Εύηχο: αυτό που ακούγεται ωραία.", &Options::default()),
			"Euhxo: auto pou akougetai wraia."
		);
	}

	#[test]
	fn test_long_sentence() {
		assert_eq!(
			greeklish(
				"Εξ ου και δηλον οτι ουδεμια των ηθικων αρετων φυσει ημιν εγγινεται",
				&Options::default()
			),
			"Eks ou kai dhlon oti oudemia twn hthikwn aretwn fysei hmin egginetai"
		);
	}

	#[test]
	fn test_question_mark_is_replaced() {
		assert_eq!(
			greeklish("καλημερα, πως ειστε;", &Options::default()),
			"kalhmera, pws eiste?"
		);
	}

	#[test]
	fn test_ignore_chars_keeps_semicolon() {
		let options = Options {
			ignore_chars: Some(";".to_string()),
			..Default::default()
		};
		assert_eq!(
			greeklish("καλημερα, πως ειστε;", &options),
			"kalhmera, pws eiste;"
		);
	}

	#[test]
	fn test_ignore_chars_applies_to_every_rule() {
		let options = Options {
			ignore_chars: Some("αου".to_string()),
			..Default::default()
		};
		// Neither digraphs nor single letters may start on an ignored letter
		assert_eq!(greeklish("αυτό που", &options), "αυto pου");
	}

	#[test]
	fn test_identity_on_latin_text() {
		let text = "Nothing to see here: just ASCII, digits 123 and ü.";
		assert_eq!(greeklish(text, &Options::default()), text);
	}

	#[test]
	fn test_output_is_a_fixed_point() {
		let options = Options::default();
		let once = greeklish("Θηρίο, ψυχή; Ωκεανός ΕΥΡΩΠΗ γχ", &options);
		assert_eq!(greeklish(&once, &options), once);
	}

	#[test]
	fn test_digraphs_win_over_letters() {
		let options = Options::default();
		assert_eq!(greeklish("ΓΧ γχ ΤΘ τθ", &options), "GX gx T8 t8");
		assert_eq!(greeklish("θη Θη ΘΗ", &options), "8h 8h 8H");
		assert_eq!(greeklish("ΑΥ ΕΥ ΟΥ εϋ Οΰ", &options), "AY EY OY ey Oy");
	}

	#[test]
	fn test_literal_quirks() {
		let options = Options::default();
		assert_eq!(greeklish("Παπάς", &options), "papas");
		assert_eq!(greeklish("ΩΏωώ", &options), "wwww");
		assert_eq!(greeklish("ΘΞΨ", &options), "THKSPs");
	}

	#[test]
	fn test_unique_numeric() {
		let options = Options {
			unique: Unique::Numeric,
			..Default::default()
		};
		assert_eq!(
			greeklish("Εύηχο: αυτό που ακούγεται ωραία.", &options),
			"Euhxo: auto0 pou akou0getai wrai0a."
		);
	}

	#[test]
	fn test_unique_numeric_counts_up() {
		let options = Options {
			unique: Unique::Numeric,
			..Default::default()
		};
		assert_eq!(greeklish("ΩωΏώ", &options), "ww0w1w2");
	}

	#[test]
	fn test_unique_alphabet() {
		let options = Options {
			unique: Unique::from_alphabet("abcd"),
			..Default::default()
		};
		assert_eq!(greeklish("ΰύϋυΦΩΏώ", &options), "yyaybycFwwawb");
	}

	#[test]
	fn test_unique_state_spans_non_matching_rules() {
		let options = Options {
			unique: Unique::Numeric,
			..Default::default()
		};
		// σ and ς are far apart in the table but nothing in between matches
		assert_eq!(greeklish("σς", &options), "ss0");
		// τ matches in between, so ς starts a fresh run
		assert_eq!(greeklish("στς", &options), "sts");
	}

	#[test]
	fn test_prefix_and_suffix_wrap_every_replacement() {
		let options = Options {
			prefix: "_g[".to_string(),
			suffix: "]_".to_string(),
			..Default::default()
		};
		assert_eq!(
			greeklish("A miχture of latϊn and greek chάracters.", &options),
			"A mi_g[x]_ture of lat_g[i]_n and greek ch_g[a]_racters."
		);
	}

	#[test]
	fn test_prefix_and_suffix_wrap_unique_suffixes() {
		let options = Options {
			prefix: "<".to_string(),
			suffix: ">".to_string(),
			unique: Unique::Numeric,
			..Default::default()
		};
		assert_eq!(greeklish("ωώ", &options), "<w><w0>");
	}

	#[test]
	fn test_unique_state_step() {
		let unique = Unique::Numeric;
		let state = UniqueState::default();

		let (state, first) = state.step("w", &unique);
		assert_eq!(first, "w");
		let (state, second) = state.step("w", &unique);
		assert_eq!(second, "w0");
		let (state, third) = state.step("w", &unique);
		assert_eq!(third, "w1");
		assert_eq!(state.counter, 2);

		let (state, other) = state.step("s", &unique);
		assert_eq!(other, "s");
		assert_eq!(state.last, Some("s"));
		assert_eq!(state.counter, 0);
	}

	#[test]
	fn test_custom_rules() {
		let rules = [Rule::new("ab", "x"), Rule::new("a", "y")];
		let transliterator = Transliterator::with_rules(&rules, &Options::default()).unwrap();
		assert_eq!(transliterator.transform("aab"), "yx");
	}

	#[test]
	fn test_rejects_short_unique_alphabet() {
		let options = Options {
			unique: Unique::from_alphabet("xyz"),
			..Default::default()
		};
		assert!(Transliterator::new(&options).is_err());
	}
}
