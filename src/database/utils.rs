/// Collapse the indentation of a triple-quoted SQL literal into a single line.
pub fn sql(query: &str) -> String {
    query.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::sql;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            sql("SELECT\n    id,\n    name\nFROM\n    teams"),
            "SELECT id, name FROM teams"
        );
    }
}
