use crate::db::repository::TransactionStore;
use crate::error::{CommandError, InputError};
use crate::models::transaction::{parse_amount, Transaction, TransactionType};
use chrono::{Local, NaiveDate};
use rust_decimal::RoundingStrategy;
use uuid::Uuid;

pub const DETAILS_FORMAT: &str = "date(YYYY-MM-DD, blank for today), type(income/expense), description, category, amount";

const DESCRIPTION_MAX: usize = 255;
const CATEGORY_MAX: usize = 50;

// Fields may be quoted to carry commas
pub fn create_transaction(input: &str) -> Result<Transaction, InputError> {
    let fields = split_fields(input)?;
    if fields.len() != 5 {
        return Err(InputError::FieldCount {
            expected: 5,
            got: fields.len(),
        });
    }

    let date = parse_date(&fields[0])?;
    let transaction_type = parse_type(&fields[1])?;

    let description = required(&fields[2], "Description")?;
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(InputError::TooLong {
            field: "Description",
            max: DESCRIPTION_MAX,
        });
    }

    let category = required(&fields[3], "Category")?;
    if category.chars().count() > CATEGORY_MAX {
        return Err(InputError::TooLong {
            field: "Category",
            max: CATEGORY_MAX,
        });
    }

    let amount = format_amount(required(&fields[4], "Amount")?)?;

    Ok(Transaction::new(
        Uuid::new_v4(),
        date,
        transaction_type,
        description.to_string(),
        category.to_string(),
        amount,
    ))
}

pub fn add_transaction_to_store(store: &TransactionStore, input: &str) -> Result<Transaction, CommandError> {
    let transaction = create_transaction(input)?;
    Ok(store.add(transaction)?)
}

fn split_fields(input: &str) -> Result<Vec<String>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record.iter().map(str::to_string).collect()),
        Some(Err(e)) => Err(InputError::Malformed(e.to_string())),
        None => Ok(Vec::new()),
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, InputError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(InputError::MissingField(field));
    }
    Ok(value)
}

// Blank means today. Dates are written back zero-padded so they sort as text.
fn parse_date(value: &str) -> Result<String, InputError> {
    let value = value.trim();
    let date = if value.is_empty() {
        Local::now().date_naive()
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| InputError::InvalidDate(value.to_string()))?
    };
    Ok(date.format("%Y-%m-%d").to_string())
}

fn parse_type(value: &str) -> Result<TransactionType, InputError> {
    match value.trim().to_lowercase().as_str() {
        "" | "expense" => Ok(TransactionType::Expense),
        "income" => Ok(TransactionType::Income),
        other => Err(InputError::InvalidType(other.to_string())),
    }
}

pub fn format_amount(value: &str) -> Result<String, InputError> {
    let amount = parse_amount(value).ok_or_else(|| InputError::InvalidAmount(value.to_string()))?;
    // Two fraction digits, ties rounded to even
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    // Too large to carry the cents inside Decimal's 28 digits
    rounded.rescale(2);
    if rounded.scale() != 2 {
        return Err(InputError::InvalidAmount(value.to_string()));
    }
    Ok(rounded.to_string())
}
