use crate::models::transaction::Transaction;

// Empty strings mean "not supplied"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub keyword: String,
    pub category: String,
    pub date: String,
}

impl SearchCriteria {
    pub fn new(keyword: &str, category: &str, date: &str) -> Self {
        Self {
            keyword: keyword.trim().to_string(),
            category: category.trim().to_string(),
            date: date.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty() && self.category.is_empty() && self.date.is_empty()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.keyword.is_empty()
            && !transaction
                .description
                .to_lowercase()
                .contains(&self.keyword.to_lowercase())
        {
            return false;
        }
        if !self.category.is_empty()
            && transaction.category.to_lowercase() != self.category.to_lowercase()
        {
            return false;
        }
        if !self.date.is_empty() && transaction.date != self.date {
            return false;
        }
        true
    }
}

pub fn filter_transactions(transactions: Vec<Transaction>, criteria: &SearchCriteria) -> Vec<Transaction> {
    if criteria.is_empty() {
        return transactions;
    }
    transactions
        .into_iter()
        .filter(|transaction| criteria.matches(transaction))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" | "asc" | "ascending" => Some(SortOrder::Ascending),
            "desc" | "descending" => Some(SortOrder::Descending),
            _ => None,
        }
    }
}

// Equal dates keep their relative order in both directions
pub fn sort_by_date(transactions: &[Transaction], order: SortOrder) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    match order {
        SortOrder::Ascending => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::TransactionType;
    use uuid::Uuid;

    fn create_test_transaction(date: &str, description: &str, category: &str) -> Transaction {
        Transaction::new(
            Uuid::new_v4(),
            date.to_string(),
            TransactionType::Expense,
            description.to_string(),
            category.to_string(),
            "10.00".to_string(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            create_test_transaction("2025-03-02", "Food court", "Meals"),
            create_test_transaction("2025-03-01", "FOOD delivery", "meals"),
            create_test_transaction("2025-03-02", "transport", "Travel"),
        ]
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let transactions = sample();
        let result = filter_transactions(transactions.clone(), &SearchCriteria::default());
        assert_eq!(result, transactions);
    }

    #[test]
    fn test_keyword_is_case_insensitive_substring() {
        let result = filter_transactions(sample(), &SearchCriteria::new("food", "", ""));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].description, "Food court");
        assert_eq!(result[1].description, "FOOD delivery");
    }

    #[test]
    fn test_category_is_case_insensitive_exact() {
        let result = filter_transactions(sample(), &SearchCriteria::new("", "MEALS", ""));
        assert_eq!(result.len(), 2);

        let result = filter_transactions(sample(), &SearchCriteria::new("", "Meal", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_date_is_exact_match() {
        let result = filter_transactions(sample(), &SearchCriteria::new("", "", "2025-03-02"));
        assert_eq!(result.len(), 2);

        let result = filter_transactions(sample(), &SearchCriteria::new("", "", "2025-3-2"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let result = filter_transactions(sample(), &SearchCriteria::new("food", "meals", "2025-03-01"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].description, "FOOD delivery");
    }

    #[test]
    fn test_filter_matching_nothing_is_empty() {
        let result = filter_transactions(sample(), &SearchCriteria::new("rent", "", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn test_sort_by_date_ascending_is_stable() {
        let transactions = sample();
        let sorted = sort_by_date(&transactions, SortOrder::Ascending);
        let descriptions: Vec<&str> = sorted.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["FOOD delivery", "Food court", "transport"]);
        assert_eq!(transactions[0].description, "Food court");
    }

    #[test]
    fn test_sort_by_date_descending_keeps_ties_in_order() {
        let sorted = sort_by_date(&sample(), SortOrder::Descending);
        let descriptions: Vec<&str> = sorted.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Food court", "transport", "FOOD delivery"]);
    }

    #[test]
    fn test_sort_by_date_is_idempotent() {
        let once = sort_by_date(&sample(), SortOrder::Ascending);
        let twice = sort_by_date(&once, SortOrder::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Descending));
        assert_eq!(SortOrder::parse(""), Some(SortOrder::Ascending));
        assert_eq!(SortOrder::parse("sideways"), None);
    }
}
