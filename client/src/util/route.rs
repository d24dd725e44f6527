//! Route parameter parsing.

use content::types::RecordId;

/// A numeric `:id` segment; `None` when missing or not a number.
pub fn parse_route_id(param: Option<String>) -> Option<RecordId> {
    param.and_then(|raw| raw.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_route_id(Some("12".to_owned())), Some(12));
        assert_eq!(parse_route_id(Some(" 7 ".to_owned())), Some(7));
    }

    #[test]
    fn junk_and_missing_are_none() {
        assert_eq!(parse_route_id(Some("abc".to_owned())), None);
        assert_eq!(parse_route_id(None), None);
    }
}
