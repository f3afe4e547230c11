//! String assembly for the derived columns.

/// Collapses every whitespace run to one space and trims both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn part(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}

/// `first last`.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    collapse_whitespace(&format!("{} {}", part(first), part(last)))
}

/// `house street [suffix] [unit]`.
///
/// `suffix` and `unit` are `None` when the role did not resolve at all, and
/// `Some(None)` when it resolved but the cell is missing; both contribute
/// nothing after whitespace collapsing.
pub fn address_line(
    house: Option<&str>,
    street: Option<&str>,
    suffix: Option<Option<&str>>,
    unit: Option<Option<&str>>,
) -> String {
    let mut line = format!("{} {}", part(house), part(street));
    for optional in [suffix, unit].into_iter().flatten() {
        line.push(' ');
        line.push_str(part(optional));
    }
    collapse_whitespace(&line)
}

/// `line, city, state zip`.
pub fn full_address(
    line: &str,
    city: Option<&str>,
    state: Option<&str>,
    zip: Option<&str>,
) -> String {
    collapse_whitespace(&format!(
        "{line}, {}, {} {}",
        part(city),
        part(state),
        part(zip)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_tabs_and_newlines() {
        assert_eq!(collapse_whitespace(" 12\t MAIN \n ST  "), "12 MAIN ST");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn address_line_with_all_parts() {
        let line = address_line(
            Some("123"),
            Some("MAIN"),
            Some(Some("ST")),
            Some(Some("APT 4")),
        );
        assert_eq!(line, "123 MAIN ST APT 4");
    }

    #[test]
    fn address_line_without_optional_roles() {
        assert_eq!(address_line(Some(" 9 "), Some("OAK"), None, None), "9 OAK");
        assert_eq!(
            address_line(Some("9"), Some("OAK"), Some(None), Some(Some(" "))),
            "9 OAK"
        );
    }

    #[test]
    fn empty_line_keeps_separators() {
        assert_eq!(
            full_address("", Some("Springfield"), Some("IL"), Some("62704")),
            ", Springfield, IL 62704"
        );
    }

    #[test]
    fn missing_first_name_leaves_last_name() {
        assert_eq!(full_name(None, Some("SMITH")), "SMITH");
        assert_eq!(full_name(Some("  "), Some(" SMITH ")), "SMITH");
    }

    proptest! {
        #[test]
        fn collapsed_text_is_normalized(value in "[ a-zA-Z0-9\t\n]{0,40}") {
            let collapsed = collapse_whitespace(&value);
            prop_assert!(!collapsed.contains("  "));
            prop_assert_eq!(collapsed.trim(), collapsed.as_str());
            prop_assert!(!collapsed.contains('\t') && !collapsed.contains('\n'));
            prop_assert_eq!(collapse_whitespace(&collapsed), collapsed.clone());
        }
    }
}
