//! List query builder for CRUD endpoints

/// Sort direction for a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Builder for the filter/sort/page parameters the list endpoints accept.
///
/// Filters and sorts keep insertion order; the server receives them as
/// `filters[field]=value` and `sorts[field]=asc|desc` pairs.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    filters: Vec<(String, String)>,
    sorts: Vec<(String, SortDir)>,
    size: Option<u32>,
    page: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict results to rows where `field` equals `value`
    pub fn filter(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((field.into(), value.to_string()));
        self
    }

    /// Order results by `field`
    pub fn sort(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sorts.push((field.into(), dir));
        self
    }

    /// Limit the number of rows returned
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Select a result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Flatten into query pairs ready for URL encoding
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + self.sorts.len() + 2);

        for (field, value) in &self.filters {
            pairs.push((format!("filters[{}]", field), value.clone()));
        }

        for (field, dir) in &self.sorts {
            pairs.push((format!("sorts[{}]", field), dir.as_str().to_string()));
        }

        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }

        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(ListQuery::new().to_pairs().is_empty());
    }

    #[test]
    fn test_latest_order_query_pairs() {
        let query = ListQuery::new()
            .filter("user_id", 42)
            .filter("status", "A")
            .sort("id", SortDir::Desc)
            .size(1);

        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("filters[user_id]".to_string(), "42".to_string()),
                ("filters[status]".to_string(), "A".to_string()),
                ("sorts[id]".to_string(), "desc".to_string()),
                ("size".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_and_sort_directions() {
        let query = ListQuery::new()
            .sort("name", SortDir::Asc)
            .size(25)
            .page(3);

        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("sorts[name]".to_string(), "asc".to_string()),
                ("size".to_string(), "25".to_string()),
                ("page".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_filters_keep_insertion_order() {
        let query = ListQuery::new()
            .filter("catalog_id", 7)
            .filter("status", "A");

        let pairs = query.to_pairs();
        assert_eq!(pairs[0].0, "filters[catalog_id]");
        assert_eq!(pairs[1].0, "filters[status]");
    }
}
