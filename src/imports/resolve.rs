use crate::database::models::MappingWithTeam;
use crate::imports::normalize::normalize_team_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Debug)]
pub struct ResolvedRow<'a> {
    pub mapping: &'a MappingWithTeam,
    pub side: Side,
    pub opponent: String,
}

/// Match a spreadsheet row against the stored mapping rules.
///
/// Candidate rules are those whose division text is a substring of the row's
/// division label, tried most specific first (longest division text, then
/// lowest id) so resolution stays deterministic when rules overlap. A rule
/// whose team text appears in the home cell wins as a home match; failing
/// that, the visitor cell wins as an away match. The opponent is the
/// normalized other cell.
pub fn resolve_row<'a>(
    mappings: &'a [MappingWithTeam],
    division: &str,
    home: &str,
    visitor: &str,
) -> Option<ResolvedRow<'a>> {
    let mut candidates: Vec<&MappingWithTeam> = mappings
        .iter()
        .filter(|m| division.contains(&m.division_text))
        .collect();
    candidates.sort_by(|a, b| {
        b.division_text
            .len()
            .cmp(&a.division_text.len())
            .then(a.id.cmp(&b.id))
    });

    for mapping in candidates {
        if home.contains(&mapping.team_name_text) {
            return Some(ResolvedRow {
                mapping,
                side: Side::Home,
                opponent: normalize_team_name(visitor),
            });
        }
        if visitor.contains(&mapping.team_name_text) {
            return Some(ResolvedRow {
                mapping,
                side: Side::Away,
                opponent: normalize_team_name(home),
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id: i64, division: &str, team: &str) -> MappingWithTeam {
        MappingWithTeam {
            id,
            division_text: division.to_string(),
            team_name_text: team.to_string(),
            team_id: id,
            team_name: format!("{} {}", division, team),
            team_category: division.to_string(),
        }
    }

    #[test]
    fn resolves_home_side() {
        let mappings = vec![mapping(1, "U13", "Seclin")];
        let resolved = resolve_row(&mappings, "U13 Poule A", "Seclin 1", "Rival").unwrap();
        assert_eq!(resolved.side, Side::Home);
        assert_eq!(resolved.mapping.id, 1);
        assert_eq!(resolved.opponent, "Rival");
    }

    #[test]
    fn resolves_away_side() {
        let mappings = vec![mapping(1, "U13", "Seclin")];
        let resolved = resolve_row(&mappings, "U13 Poule A", "Rival (2)", "Seclin 1").unwrap();
        assert_eq!(resolved.side, Side::Away);
        assert_eq!(resolved.opponent, "Rival");
    }

    #[test]
    fn unmatched_division_resolves_nothing() {
        let mappings = vec![mapping(1, "U13", "Seclin")];
        assert!(resolve_row(&mappings, "U15 Poule B", "Seclin 1", "Rival").is_none());
    }

    #[test]
    fn unmatched_team_cells_resolve_nothing() {
        let mappings = vec![mapping(1, "U13", "Seclin")];
        assert!(resolve_row(&mappings, "U13 Poule A", "Lille", "Rival").is_none());
    }

    #[test]
    fn most_specific_division_wins() {
        let mappings = vec![
            mapping(1, "U13", "Seclin"),
            mapping(2, "U13 Poule A", "Seclin"),
        ];
        let resolved = resolve_row(&mappings, "U13 Poule A", "Seclin 1", "Rival").unwrap();
        assert_eq!(resolved.mapping.id, 2);
    }

    #[test]
    fn equal_specificity_breaks_ties_by_id() {
        let mappings = vec![mapping(7, "U13", "Seclin"), mapping(3, "U13", "Seclin B")];
        let resolved = resolve_row(&mappings, "U13 Poule A", "Seclin B", "Rival").unwrap();
        assert_eq!(resolved.mapping.id, 3);
    }
}
