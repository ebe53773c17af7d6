/// A single substitution: every match of `pattern` becomes `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
	/// Regex source; a literal or a plain alternation.
	pub pattern: &'static str,

	/// Literal replacement text.
	pub replacement: &'static str,
}

impl Rule {
	pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
		Rule {
			pattern,
			replacement,
		}
	}
}

/// The Greek to Greeklish rule table, applied top to bottom.
///
/// Digraphs come first so the single letters they contain are still intact
/// when they are matched. `Π` maps to `p` and the omega family to `w` in
/// every case; existing output depends on that.
pub const RULES: &[Rule] = &[
	Rule::new("ΓΧ", "GX"),
	Rule::new("γχ", "gx"),
	Rule::new("ΤΘ", "T8"),
	Rule::new("τθ", "t8"),
	Rule::new("(θη|Θη)", "8h"),
	Rule::new("ΘΗ", "8H"),
	Rule::new("αυ", "au"),
	Rule::new("Αυ", "Au"),
	Rule::new("ΑΥ", "AY"),
	Rule::new("ευ", "eu"),
	Rule::new("εύ", "eu"),
	Rule::new("εϋ", "ey"),
	Rule::new("εΰ", "ey"),
	Rule::new("Ευ", "Eu"),
	Rule::new("Εύ", "Eu"),
	Rule::new("Εϋ", "Ey"),
	Rule::new("Εΰ", "Ey"),
	Rule::new("ΕΥ", "EY"),
	Rule::new("ου", "ou"),
	Rule::new("ού", "ou"),
	Rule::new("οϋ", "oy"),
	Rule::new("οΰ", "oy"),
	Rule::new("Ου", "Ou"),
	Rule::new("Ού", "Ou"),
	Rule::new("Οϋ", "Oy"),
	Rule::new("Οΰ", "Oy"),
	Rule::new("ΟΥ", "OY"),
	Rule::new("Α", "A"),
	Rule::new("Ά", "A"),
	Rule::new("α", "a"),
	Rule::new("ά", "a"),
	Rule::new("Β", "B"),
	Rule::new("β", "b"),
	Rule::new("Γ", "G"),
	Rule::new("γ", "g"),
	Rule::new("Δ", "D"),
	Rule::new("δ", "d"),
	Rule::new("Ε", "E"),
	Rule::new("Έ", "E"),
	Rule::new("ε", "e"),
	Rule::new("έ", "e"),
	Rule::new("Ζ", "Z"),
	Rule::new("ζ", "z"),
	Rule::new("Η", "H"),
	Rule::new("Ή", "H"),
	Rule::new("η", "h"),
	Rule::new("ή", "h"),
	Rule::new("Θ", "TH"),
	Rule::new("θ", "th"),
	Rule::new("Ι", "I"),
	Rule::new("Ϊ", "I"),
	Rule::new("Ί", "I"),
	Rule::new("ι", "i"),
	Rule::new("ί", "i"),
	Rule::new("ΐ", "i"),
	Rule::new("ϊ", "i"),
	Rule::new("Κ", "K"),
	Rule::new("κ", "k"),
	Rule::new("Λ", "L"),
	Rule::new("λ", "l"),
	Rule::new("Μ", "M"),
	Rule::new("μ", "m"),
	Rule::new("Ν", "N"),
	Rule::new("ν", "n"),
	Rule::new("Ξ", "KS"),
	Rule::new("ξ", "ks"),
	Rule::new("Ο", "O"),
	Rule::new("Ό", "O"),
	Rule::new("ο", "o"),
	Rule::new("ό", "o"),
	Rule::new("Π", "p"),
	Rule::new("π", "p"),
	Rule::new("Ρ", "R"),
	Rule::new("ρ", "r"),
	Rule::new("Σ", "S"),
	Rule::new("σ", "s"),
	Rule::new("Τ", "T"),
	Rule::new("τ", "t"),
	Rule::new("Υ", "Y"),
	Rule::new("Ύ", "Y"),
	Rule::new("Ϋ", "Y"),
	Rule::new("ΰ", "y"),
	Rule::new("ύ", "y"),
	Rule::new("ϋ", "y"),
	Rule::new("υ", "y"),
	Rule::new("Φ", "F"),
	Rule::new("φ", "f"),
	Rule::new("Χ", "X"),
	Rule::new("χ", "x"),
	Rule::new("Ψ", "Ps"),
	Rule::new("ψ", "ps"),
	Rule::new("Ω", "w"),
	Rule::new("ω", "w"),
	Rule::new("Ώ", "w"),
	Rule::new("ώ", "w"),
	Rule::new("ς", "s"),
	Rule::new(";", "?"),
];
