use crate::spec::SUFFIX_INPUT_DEFAULT;

/// Whether an entry basename names an input file.
pub(crate) fn has_input_suffix(name: &str) -> bool {
    name.ends_with(SUFFIX_INPUT_DEFAULT)
}
