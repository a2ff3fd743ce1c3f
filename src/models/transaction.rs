use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// Reads the stored `Type` column. Only the exact text "Income" is income,
    /// everything else (including an absent column) counts as an expense.
    pub fn from_field(value: &str) -> Self {
        if value == "Income" {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: String,
    pub transaction_type: TransactionType,
    pub description: String,
    pub category: String,
    pub amount: String,
}

impl Transaction {
    pub fn new(
        id: Uuid,
        date: String,
        transaction_type: TransactionType,
        description: String,
        category: String,
        amount: String,
    ) -> Self {
        Self {
            id,
            date,
            transaction_type,
            description,
            category,
            amount,
        }
    }

    pub fn parsed_amount(&self) -> Option<Decimal> {
        parse_amount(&self.amount)
    }
}

// Accepts surrounding whitespace and scientific notation ("1e3")
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
