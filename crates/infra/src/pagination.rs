pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    pub limit: i64,
    pub offset: i64,
}

impl Default for LimitOffset {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl LimitOffset {
    /// Clamp to `limit >= 1` and `offset >= 0`.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.max(1),
            offset: offset.max(0),
        }
    }
}

/// Case-insensitive substring pattern for `LOWER(col) LIKE $n ESCAPE '\'`.
///
/// `%`, `_` and `\` in the input match literally. Blank input means "no
/// search" and yields `None`.
pub fn search_pattern(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", escape_like(&s.to_lowercase())))
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_first_ten() {
        assert_eq!(
            LimitOffset::default(),
            LimitOffset {
                limit: 10,
                offset: 0
            }
        );
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        let page = LimitOffset::new(0, -5);
        assert_eq!(page.limit, 1);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn search_pattern_lowercases_and_wraps() {
        assert_eq!(search_pattern(Some("APP")), Some("%app%".to_string()));
        assert_eq!(search_pattern(Some(" Apple ")), Some("%apple%".to_string()));
    }

    #[test]
    fn wildcards_in_search_match_literally() {
        assert_eq!(search_pattern(Some("%")), Some("%\\%%".to_string()));
        assert_eq!(search_pattern(Some("a_B")), Some("%a\\_b%".to_string()));
        assert_eq!(search_pattern(Some("c:\\x")), Some("%c:\\\\x%".to_string()));
    }

    #[test]
    fn blank_search_is_ignored() {
        assert_eq!(search_pattern(None), None);
        assert_eq!(search_pattern(Some("")), None);
        assert_eq!(search_pattern(Some("   ")), None);
    }
}
