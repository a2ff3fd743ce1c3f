use crate::config::Config;
use crate::db::repository::TransactionStore;
use crate::error::StoreError;

pub fn establish_store(config: &Config) -> Result<TransactionStore, StoreError> {
    let store = TransactionStore::from_config(config);
    store.initialize()?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::Schema;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_establish_store_creates_file() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_file: dir.path().join("t.csv"),
            schema: Schema::Keyed,
            currency: "RM".to_string(),
        };

        let store = establish_store(&config).unwrap();

        assert_eq!(store.schema(), Schema::Keyed);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Id,Date,Type,Description,Category,Amount\n"
        );
    }
}
