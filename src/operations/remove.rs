use crate::db::repository::TransactionStore;
use crate::error::{CommandError, InputError};
use crate::models::transaction::Transaction;
use uuid::Uuid;

pub fn parse_transaction_id(input: &str) -> Result<Uuid, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::MissingField("Transaction ID"));
    }
    Uuid::parse_str(input).map_err(|_| InputError::InvalidId(input.to_string()))
}

pub fn remove_transaction_from_store(store: &TransactionStore, id_input: &str) -> Result<Transaction, CommandError> {
    let id = parse_transaction_id(id_input)?;
    Ok(store.remove(id)?)
}
