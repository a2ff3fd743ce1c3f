use crate::models::transaction::{Transaction, TransactionType};
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;

pub const NOTHING_TO_SUMMARIZE: &str = "No transactions to summarize.";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotal {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `None` when the difference does not fit in a `Decimal`.
    pub net_balance: Option<Decimal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub by_month: Vec<MonthTotal>,
    pub counted: usize,
    /// Rows left out: unparsable amount, empty category, or a total that
    /// would overflow.
    pub skipped: usize,
}

// Keyed case-insensitively; the first spelling seen is the one reported.
#[derive(Default)]
struct CategoryTotals {
    groups: HashMap<String, CategoryTotal>,
}

impl CategoryTotals {
    fn checked_total(&self, category: &str, amount: Decimal) -> Option<Decimal> {
        self.groups
            .get(&category.to_lowercase())
            .map_or(Decimal::ZERO, |group| group.total)
            .checked_add(amount)
    }

    fn set(&mut self, category: &str, total: Decimal) {
        self.groups
            .entry(category.to_lowercase())
            .or_insert_with(|| CategoryTotal {
                category: category.to_string(),
                total: Decimal::ZERO,
            })
            .total = total;
    }

    fn into_sorted(self) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> = self.groups.into_values().collect();
        totals.sort_by(|a, b| a.category.cmp(&b.category));
        totals
    }
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();
    let mut income = CategoryTotals::default();
    let mut expense = CategoryTotals::default();
    let mut months: BTreeMap<String, MonthTotal> = BTreeMap::new();

    for transaction in transactions {
        let category = transaction.category.trim();
        let amount = match transaction.parsed_amount() {
            Some(amount) if !category.is_empty() => amount,
            _ => {
                debug!(
                    "Skipping row dated '{}' (amount '{}', category '{}')",
                    transaction.date, transaction.amount, transaction.category
                );
                summary.skipped += 1;
                continue;
            }
        };
        let is_income = transaction.transaction_type == TransactionType::Income;
        let month_key = NaiveDate::parse_from_str(transaction.date.trim(), "%Y-%m-%d")
            .ok()
            .map(|date| date.format("%Y-%m").to_string());

        // Every running total must absorb the amount before any is touched
        let (total, groups) = if is_income {
            (&mut summary.total_income, &mut income)
        } else {
            (&mut summary.total_expense, &mut expense)
        };
        let new_total = total.checked_add(amount);
        let new_group = groups.checked_total(category, amount);
        let new_month = match &month_key {
            Some(key) => months
                .get(key)
                .map_or(Decimal::ZERO, |m| if is_income { m.income } else { m.expense })
                .checked_add(amount)
                .map(Some),
            None => Some(None),
        };
        let (Some(new_total), Some(new_group), Some(new_month)) = (new_total, new_group, new_month) else {
            debug!(
                "Skipping row dated '{}': amount '{}' overflows the running totals",
                transaction.date, transaction.amount
            );
            summary.skipped += 1;
            continue;
        };

        *total = new_total;
        groups.set(category, new_group);
        if let (Some(key), Some(value)) = (month_key, new_month) {
            let month = months.entry(key.clone()).or_insert_with(|| MonthTotal {
                month: key,
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
            });
            if is_income {
                month.income = value;
            } else {
                month.expense = value;
            }
        }
        summary.counted += 1;
    }

    if summary.skipped > 0 {
        warn!("Summary skipped {} malformed row(s)", summary.skipped);
    }

    summary.net_balance = summary.total_income.checked_sub(summary.total_expense);
    summary.income_by_category = income.into_sorted();
    summary.expense_by_category = expense.into_sorted();
    summary.by_month = months.into_values().collect();
    summary
}

pub fn render_summary(summary: &Summary, currency: &str) -> String {
    if summary.counted == 0 && summary.skipped == 0 {
        return NOTHING_TO_SUMMARIZE.to_string();
    }
    format_report(summary, currency)
}

fn format_report(summary: &Summary, currency: &str) -> String {
    let money = |value: Decimal| format!("{}{:>10}", currency, format!("{:.2}", value));
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "--- Summary ---");
    let _ = writeln!(out, "{:<15}: {}", "Total Income", money(summary.total_income));
    let _ = writeln!(out, "{:<15}: {}", "Total Expenses", money(summary.total_expense));
    match summary.net_balance {
        Some(net) => {
            let _ = writeln!(out, "{:<15}: {}", "Net Balance", money(net));
        }
        None => {
            let _ = writeln!(out, "{:<15}: out of range", "Net Balance");
        }
    }

    let _ = writeln!(out, "\n--- Income by Category ---");
    if summary.income_by_category.is_empty() {
        let _ = writeln!(out, "No income recorded.");
    }
    for entry in &summary.income_by_category {
        let _ = writeln!(out, "{:<15}: {}", entry.category, money(entry.total));
    }

    let _ = writeln!(out, "\n--- Expenses by Category ---");
    if summary.expense_by_category.is_empty() {
        let _ = writeln!(out, "No expenses recorded.");
    }
    for entry in &summary.expense_by_category {
        let _ = writeln!(out, "{:<15}: {}", entry.category, money(entry.total));
    }

    if !summary.by_month.is_empty() {
        let _ = writeln!(out, "\n--- By Month ---");
        for entry in &summary.by_month {
            let _ = writeln!(
                out,
                "{:<15}: in {} | out {}",
                entry.month,
                money(entry.income),
                money(entry.expense)
            );
        }
    }

    out
}
