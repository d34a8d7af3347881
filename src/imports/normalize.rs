use regex::Regex;

/// Strip decorative suffixes from a free-text team name so it matches the
/// canonical stored name: a trailing parenthesized integer ("Team A (3)"),
/// a trailing " - N" numeric suffix ("Team B - 2"), and trailing
/// punctuation, looped until a fixed point is reached.
pub fn normalize_team_name(raw: &str) -> String {
    let paren_suffix = Regex::new(r"\(\d+\)$").unwrap();
    let dash_suffix = Regex::new(r"\s-\s*\d+$").unwrap();

    let mut name = raw.trim().to_string();
    loop {
        let before = name.clone();

        name = paren_suffix.replace(&name, "").trim_end().to_string();
        name = dash_suffix.replace(&name, "").trim_end().to_string();
        name = name
            .trim_end_matches(['.', ',', ';', ':', '-'])
            .trim_end()
            .to_string();

        if name == before {
            return name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_team_name;

    #[test]
    fn strips_parenthesized_suffix() {
        assert_eq!(normalize_team_name("Team A (3)"), "Team A");
    }

    #[test]
    fn strips_dash_suffix() {
        assert_eq!(normalize_team_name("Team B - 2"), "Team B");
    }

    #[test]
    fn leaves_plain_names_alone() {
        assert_eq!(normalize_team_name("Team C"), "Team C");
    }

    #[test]
    fn strips_trailing_punctuation() {
        assert_eq!(normalize_team_name("Team D."), "Team D");
    }

    #[test]
    fn strips_mixed_suffixes_to_fixed_point() {
        assert_eq!(normalize_team_name("Team E - 2 (1)"), "Team E");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(normalize_team_name(""), "");
        assert_eq!(normalize_team_name("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["Team A (3)", "Team B - 2", "Team C", "Seclin 1", "- 4"] {
            let once = normalize_team_name(raw);
            assert_eq!(normalize_team_name(&once), once);
        }
    }
}
