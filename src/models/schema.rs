use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Date,
    Type,
    Description,
    Category,
    Amount,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "Id",
            Column::Date => "Date",
            Column::Type => "Type",
            Column::Description => "Description",
            Column::Category => "Category",
            Column::Amount => "Amount",
        }
    }
}

/// Column layout of the transaction file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Schema {
    /// Id, Date, Type, Description, Category, Amount
    #[default]
    Keyed,
    /// Date, Type, Description, Category, Amount
    Typed,
    /// Date, Description, Category, Amount
    Legacy,
}

impl Schema {
    pub fn columns(&self) -> &'static [Column] {
        use Column::*;
        match self {
            Schema::Keyed => &[Id, Date, Type, Description, Category, Amount],
            Schema::Typed => &[Date, Type, Description, Category, Amount],
            Schema::Legacy => &[Date, Description, Category, Amount],
        }
    }

    pub fn header(&self) -> Vec<&'static str> {
        self.columns().iter().map(Column::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_keep_fixed_order() {
        assert_eq!(Schema::Typed.header(), vec!["Date", "Type", "Description", "Category", "Amount"]);
        assert_eq!(Schema::Legacy.header(), vec!["Date", "Description", "Category", "Amount"]);
        assert_eq!(Schema::Keyed.header()[0], "Id");
        assert_eq!(&Schema::Keyed.columns()[1..], Schema::Typed.columns());
    }
}
