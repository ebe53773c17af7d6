/// Commented starter `.greeklish.toml`, written by `greeklish --init`.
pub fn generate_init_template() -> String {
	r#"# greeklish configuration
#
# Files in parent directories are merged in; the closest one wins per key.
# Set `root = true` to stop looking further up (~/.greeklish.toml is still read).
root = true

# Files to transliterate when none are given on the command line.
# files = "docs/**/*.md,notes.txt"

# Files to skip.
# ignore-files = ["**/vendor/**"]

# Characters no rule may start a match on, e.g. keep ';' as is.
# ignore-chars = ";"

# Mirror output into this directory instead of rewriting files in place.
# output = "build/greeklish"

# WHATWG label of the text encoding used to read and write files.
encoding = "utf-8"

# Wrap every replacement.
# prefix = ""
# suffix = ""

# Tell apart consecutive letters that share a replacement:
# true appends 0, 1, 2...; a string of 4+ characters appends its characters.
unique = false

# Only report what would change.
test = false

# Process files concurrently.
parallel = false
"#
	.to_string()
}
