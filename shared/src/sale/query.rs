//! Sale list query builder
//!
//! Filters and ordering for the sale list endpoint, serialized as query
//! parameters. Only parameters that were actually set are emitted.

use chrono::NaiveDate;

/// Sort key for sale listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleSortKey {
    #[default]
    Date,
    Total,
    Customer,
}

impl SaleSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleSortKey::Date => "date",
            SaleSortKey::Total => "total",
            SaleSortKey::Customer => "customer",
        }
    }
}

/// Query over the sale list endpoint
#[derive(Debug, Clone, Default)]
pub struct SaleQuery {
    /// Customer name substring
    pub customer_name: Option<String>,
    /// Status filter (`None` = all statuses)
    pub status: Option<crate::models::sale::SaleStatus>,
    pub exact_date: Option<NaiveDate>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub sort_by: SaleSortKey,
    pub ascending: bool,
}

impl SaleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn status(mut self, status: crate::models::sale::SaleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.exact_date = Some(date);
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from_date = Some(from);
        self.to_date = Some(to);
        self
    }

    pub fn order_by(mut self, key: SaleSortKey, ascending: bool) -> Self {
        self.sort_by = key;
        self.ascending = ascending;
        self
    }

    /// Render as query parameter pairs; only set filters appear
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.customer_name
            && !name.is_empty()
        {
            params.push(("customer_name".to_string(), name.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(date) = self.exact_date {
            params.push(("date".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(from) = self.from_date {
            params.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to_date {
            params.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        params.push(("sort_by".to_string(), self.sort_by.as_str().to_string()));
        params.push(("ascending".to_string(), self.ascending.to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sale::SaleStatus;

    #[test]
    fn test_default_query_emits_only_ordering() {
        let params = SaleQuery::new().to_params();
        assert_eq!(
            params,
            vec![
                ("sort_by".to_string(), "date".to_string()),
                ("ascending".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_query() {
        let params = SaleQuery::new()
            .customer_name("ana")
            .status(SaleStatus::Finalized)
            .on(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .order_by(SaleSortKey::Total, true)
            .to_params();

        assert!(params.contains(&("customer_name".to_string(), "ana".to_string())));
        assert!(params.contains(&("status".to_string(), "FINALIZED".to_string())));
        assert!(params.contains(&("date".to_string(), "2024-02-01".to_string())));
        assert!(params.contains(&("sort_by".to_string(), "total".to_string())));
        assert!(params.contains(&("ascending".to_string(), "true".to_string())));
    }

    #[test]
    fn test_date_range() {
        let params = SaleQuery::new()
            .between(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
            .to_params();
        assert!(params.contains(&("from".to_string(), "2024-01-01".to_string())));
        assert!(params.contains(&("to".to_string(), "2024-01-31".to_string())));
    }

    #[test]
    fn test_empty_name_not_emitted() {
        let params = SaleQuery::new().customer_name("").to_params();
        assert!(params.iter().all(|(k, _)| k != "customer_name"));
    }
}
