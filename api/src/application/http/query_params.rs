use std::collections::HashMap;
use std::str::FromStr;

/// Filter operator for query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals (default)
    Ne,  // not equals
    Gte, // greater than or equal
    Lte, // less than or equal
    In,  // in list (comma-separated)
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            _ => Err(()),
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone)]
pub struct FilterCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub conditions: Vec<FilterCondition>,
}

impl FilterParams {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Pagination parameters
#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub offset: i64,
    pub limit: i64,
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.unwrap_or(0).max(0),
            limit: limit.unwrap_or(20).clamp(1, 100), // Default 20, max 100
        }
    }
}

/// Combined query parameters (filter, sort, pagination)
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub filter: FilterParams,
    pub sort: Option<String>,
    pub pagination: PaginationParams,
}

impl QueryParams {
    /// Parse from a query string map. Handles:
    /// - filter[field]=value (defaults to eq)
    /// - filter[field][operator]=value
    /// - sort=field or sort=-field,other
    /// - offset=0, limit=20
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let mut filter = FilterParams::default();
        let mut sort: Option<String> = None;
        let mut offset: Option<i64> = None;
        let mut limit: Option<i64> = None;

        for (key, value) in query_map {
            if let Some(filter_key) = key.strip_prefix("filter[") {
                if let Some(end_bracket) = filter_key.find(']') {
                    let field = filter_key[..end_bracket].to_string();
                    let remaining = &filter_key[end_bracket + 1..];

                    if remaining.is_empty() {
                        filter.conditions.push(FilterCondition {
                            field,
                            operator: FilterOperator::Eq,
                            value: value.clone(),
                        });
                    } else if remaining.starts_with('[')
                        && remaining.ends_with(']')
                        && let Ok(operator) =
                            remaining[1..remaining.len() - 1].parse::<FilterOperator>()
                    {
                        filter.conditions.push(FilterCondition {
                            field,
                            operator,
                            value: value.clone(),
                        });
                    }
                }
            } else if key == "sort" {
                sort = Some(value.clone());
            } else if key == "offset" {
                if let Ok(val) = value.parse::<i64>() {
                    offset = Some(val);
                }
            } else if key == "limit"
                && let Ok(val) = value.parse::<i64>()
            {
                limit = Some(val);
            }
        }

        Self {
            filter,
            sort,
            pagination: PaginationParams::new(offset, limit),
        }
    }
}
