use crate::config::Config;
use crate::error::StoreError;
use crate::models::schema::{Column, Schema};
use crate::models::transaction::{Transaction, TransactionType};
use crate::operations::search::{filter_transactions, SearchCriteria};
use csv::StringRecord;
use log::{debug, info};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
    schema: Schema,
}

impl TransactionStore {
    pub fn new(path: impl Into<PathBuf>, schema: Schema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_file.clone(), config.schema)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    // An existing file is left untouched, whatever its columns.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            debug!("{} already exists, skipping initialization", self.path.display());
            return Ok(());
        }
        info!("Creating transaction file {}", self.path.display());
        self.save_all(&[])
    }

    pub fn list_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, returning no transactions", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let columns = ColumnIndex::new(reader.headers()?);

        let mut transactions = Vec::new();
        for (position, result) in reader.records().enumerate() {
            let record = result?;
            transactions.push(columns.read(position, &record));
        }

        debug!("Loaded {} transactions from {}", transactions.len(), self.path.display());
        Ok(transactions)
    }

    pub fn save_all(&self, transactions: &[Transaction]) -> Result<(), StoreError> {
        // Write next to the target, then rename over it
        let dir = parent_dir(&self.path);
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;

        {
            let mut writer = csv::Writer::from_writer(&mut temp);
            writer.write_record(self.schema.header())?;
            for transaction in transactions {
                writer.write_record(self.row(transaction))?;
            }
            writer.flush().map_err(|e| StoreError::io(&self.path, e))?;
        }

        // Keep the mode of the file being replaced
        match fs::metadata(&self.path) {
            Ok(metadata) => temp
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| StoreError::io(&self.path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io(&self.path, e)),
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| StoreError::io(&self.path, e))?;
        temp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.clone(),
            source: e,
        })?;

        info!("Wrote {} transactions to {}", transactions.len(), self.path.display());
        Ok(())
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Transaction>, StoreError> {
        let all = self.list_all()?;
        Ok(filter_transactions(all, criteria))
    }

    pub fn add(&self, transaction: Transaction) -> Result<Transaction, StoreError> {
        let mut transactions = self.list_all()?;
        transactions.push(transaction.clone());
        self.save_all(&transactions)?;
        Ok(transaction)
    }

    pub fn update(&self, id: Uuid, mut replacement: Transaction) -> Result<Transaction, StoreError> {
        let mut transactions = self.list_all()?;
        let slot = transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        replacement.id = id;
        *slot = replacement.clone();
        self.save_all(&transactions)?;
        Ok(replacement)
    }

    pub fn remove(&self, id: Uuid) -> Result<Transaction, StoreError> {
        let mut transactions = self.list_all()?;
        let pos = transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = transactions.remove(pos);
        self.save_all(&transactions)?;
        Ok(removed)
    }

    fn row(&self, transaction: &Transaction) -> Vec<String> {
        self.schema
            .columns()
            .iter()
            .map(|column| match column {
                Column::Id => transaction.id.to_string(),
                Column::Date => transaction.date.clone(),
                Column::Type => transaction.transaction_type.as_str().to_string(),
                Column::Description => transaction.description.clone(),
                Column::Category => transaction.category.clone(),
                Column::Amount => transaction.amount.clone(),
            })
            .collect()
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// Header positions looked up by name, so files in any schema can be read
struct ColumnIndex {
    id: Option<usize>,
    date: Option<usize>,
    transaction_type: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let find = |column: Column| headers.iter().position(|h| h.trim() == column.name());
        Self {
            id: find(Column::Id),
            date: find(Column::Date),
            transaction_type: find(Column::Type),
            description: find(Column::Description),
            category: find(Column::Category),
            amount: find(Column::Amount),
        }
    }

    fn read(&self, position: usize, record: &StringRecord) -> Transaction {
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .to_string()
        };

        let id = self
            .id
            .and_then(|i| record.get(i))
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .unwrap_or_else(|| derived_id(position, record));

        Transaction {
            id,
            date: field(self.date),
            transaction_type: TransactionType::from_field(&field(self.transaction_type)),
            description: field(self.description),
            category: field(self.category),
            amount: field(self.amount),
        }
    }
}

// Rows stored without an id get a name-based UUID over position and contents,
// so an unchanged file always yields the same ids.
fn derived_id(position: usize, record: &StringRecord) -> Uuid {
    let mut name = position.to_string();
    for value in record.iter() {
        name.push('\u{1f}');
        name.push_str(value);
    }
    Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}
