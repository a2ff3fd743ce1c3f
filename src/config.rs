use crate::models::schema::Schema;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spend", version, about = "Record, search and summarize income and expenses")]
pub struct Args {
    /// CSV file holding the transactions
    #[arg(short, long, default_value = "transactions.csv")]
    pub file: PathBuf,

    /// Column layout used when writing the file
    #[arg(short, long, value_enum, default_value_t = Schema::Keyed)]
    pub schema: Schema,

    /// Label printed in front of amounts in the summary
    #[arg(short, long, default_value = "RM")]
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub schema: Schema,
    pub currency: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            data_file: args.file,
            schema: args.schema,
            currency: args.currency,
        }
    }
}
