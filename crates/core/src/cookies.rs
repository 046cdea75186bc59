//! Minimal cookie header parsing

/// Look up `name` in a `document.cookie` style header (`a=1; b=2`).
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Render a `Set-Cookie` style assignment for `document.cookie`.
pub fn cookie_assignment(name: &str, value: &str, max_age: Option<u32>) -> String {
    match max_age {
        Some(age) => format!("{name}={value}; path=/; max-age={age}"),
        None => format!("{name}={value}; path=/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_value_among_several_cookies() {
        let header = "theme=dark; rememberMe=true; SALES_CLOSE_MANAGE_LOCALE=en";
        assert_eq!(cookie_value(header, "rememberMe"), Some("true"));
        assert_eq!(cookie_value(header, "SALES_CLOSE_MANAGE_LOCALE"), Some("en"));
    }

    #[test]
    fn does_not_match_name_suffix() {
        assert_eq!(cookie_value("xrememberMe=true", "rememberMe"), None);
        assert_eq!(cookie_value("", "rememberMe"), None);
    }

    #[test]
    fn assignment_includes_path_and_age() {
        assert_eq!(
            cookie_assignment("rememberMe", "true", Some(60)),
            "rememberMe=true; path=/; max-age=60"
        );
        assert_eq!(cookie_assignment("a", "b", None), "a=b; path=/");
    }
}
