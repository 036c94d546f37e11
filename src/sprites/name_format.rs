//! Logical name to sprite-group id formatting
//!
//! A module's record carries a `name_format` template; substituting the
//! creature's logical name into it yields the base name of the folder or
//! archive holding that creature's frames.

/// Template applied when a module record has no `name_format`
pub const DEFAULT_NAME_FORMAT: &str = "$_dmc";

/// Token replaced by the logical name inside a template
pub const NAME_TOKEN: char = '$';

/// Separator character normalized out of formatted ids
const MODULE_SEPARATOR: char = ':';

/// Derive the on-disk sprite-group id for a logical name
///
/// Every occurrence of [`NAME_TOKEN`] in the template is replaced with
/// `logical_name`, then every `:` in the result becomes `_` so the id is
/// usable as a file name. An empty `name_format` falls back to
/// [`DEFAULT_NAME_FORMAT`]. Pure and total: every input pair maps to
/// exactly one id, there are no failure cases.
pub fn sprite_group_id(logical_name: &str, name_format: &str) -> String {
    let template = if name_format.is_empty() {
        DEFAULT_NAME_FORMAT
    } else {
        name_format
    };

    template
        .replace(NAME_TOKEN, logical_name)
        .replace(MODULE_SEPARATOR, "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        assert_eq!(sprite_group_id("Agumon", ""), "Agumon_dmc");
    }

    #[test]
    fn test_separator_normalized() {
        // Fused-species names carry ':' which no filesystem group name can
        assert_eq!(sprite_group_id("War:Greymon", ""), "War_Greymon_dmc");
    }

    #[test]
    fn test_custom_template() {
        assert_eq!(sprite_group_id("Betamon", "$_penc"), "Betamon_penc");
        assert_eq!(sprite_group_id("Betamon", "pen_$"), "pen_Betamon");
    }

    #[test]
    fn test_token_repeats() {
        assert_eq!(sprite_group_id("A", "$$"), "AA");
    }

    #[test]
    fn test_template_without_token() {
        // Degenerate but legal: the name simply never appears
        assert_eq!(sprite_group_id("Agumon", "static"), "static");
    }

    #[test]
    fn test_separator_in_template_also_normalized() {
        assert_eq!(sprite_group_id("Agumon", "v1:$"), "v1_Agumon");
    }

    #[test]
    fn test_empty_name_still_formats() {
        assert_eq!(sprite_group_id("", ""), "_dmc");
    }
}
