/// Table-scoped query builder rendered as REST query parameters.
///
/// Covers exactly what the app needs from the remote query contract:
/// column selection, equality filter, case-insensitive pattern filter and
/// a row limit. Filters accumulate in call order.
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    limit: Option<u32>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Case-insensitive pattern filter. The pattern is passed through as-is:
    /// no wildcards means exact match, a trailing `%` means prefix match.
    pub fn ilike(mut self, column: &str, pattern: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.{pattern}")));
        self
    }

    pub fn limit(mut self, rows: u32) -> Self {
        self.limit = Some(rows);
        self
    }

    /// Render as key/value query pairs, select first, limit last.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        if let Some(select) = &self.select {
            params.push(("select".to_string(), select.clone()));
        }
        params.extend(self.filters.iter().cloned());
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_params() {
        let query = TableQuery::new("dictionary")
            .select("*")
            .eq("language", "en")
            .ilike("word", "Apple")
            .limit(1);

        assert_eq!(query.table(), "dictionary");
        assert_eq!(
            query.params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("language".to_string(), "eq.en".to_string()),
                ("word".to_string(), "ilike.Apple".to_string()),
                ("limit".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn prefix_lookup_params() {
        let query = TableQuery::new("dictionary")
            .select("word")
            .eq("language", "en")
            .ilike("word", "ap%")
            .limit(5);

        assert_eq!(
            query.params(),
            vec![
                ("select".to_string(), "word".to_string()),
                ("language".to_string(), "eq.en".to_string()),
                ("word".to_string(), "ilike.ap%".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn bare_query_has_no_params() {
        assert!(TableQuery::new("dictionary").params().is_empty());
    }
}
