use crate::db::repository::TransactionStore;
use crate::error::CommandError;
use crate::models::transaction::Transaction;
use crate::operations::add::create_transaction;
use crate::operations::remove::parse_transaction_id;

pub fn update_transaction_in_store(
    store: &TransactionStore,
    id_input: &str,
    details_input: &str,
) -> Result<Transaction, CommandError> {
    let id = parse_transaction_id(id_input)?;
    let replacement = create_transaction(details_input)?;
    Ok(store.update(id, replacement)?)
}
