mod config;
mod db;
mod error;
mod models;
mod operations;

use anyhow::Result;
use clap::Parser;
use config::{Args, Config};
use log::info;
use models::transaction::Transaction;
use operations::add::{add_transaction_to_store, DETAILS_FORMAT};
use operations::remove::{parse_transaction_id, remove_transaction_from_store};
use operations::search::{sort_by_date, SearchCriteria, SortOrder};
use operations::summary::{render_summary, summarize};
use operations::update::update_transaction_in_store;
use std::io::{self, Write};

pub enum UserCommands {
    Add,
    Update,
    Remove,
    Print,
    Search,
    Sort,
    Summary,
    Exit,
    Unknown,
}

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from(Args::parse());
    let store = db::connection::establish_store(&config)?;
    info!(
        "Using {} ({:?} schema)",
        store.path().display(),
        store.schema()
    );

    println!("Welcome to the spending recorder!");
    loop {
        println!("Please enter a command (add, update, remove, print, search, sort, summary, exit):");
        let Some(input) = read_user_input()? else {
            break;
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match check_for_command(parts[0]) {
            UserCommands::Add => {
                println!("Enter transaction details in the format:\n{}", DETAILS_FORMAT);
                let Some(details) = read_user_input()? else { break };
                match add_transaction_to_store(&store, &details) {
                    Ok(transaction) => println!("Transaction {} added successfully!", transaction.id),
                    Err(e) => println!("Error adding transaction: {}", e),
                }
            }
            UserCommands::Update => {
                println!("Provide the transaction ID to update:");
                let Some(id) = read_user_input()? else { break };
                if let Err(e) = parse_transaction_id(&id) {
                    println!("Error: {}", e);
                    continue;
                }
                println!("Enter the new details in the format:\n{}", DETAILS_FORMAT);
                let Some(details) = read_user_input()? else { break };
                match update_transaction_in_store(&store, &id, &details) {
                    Ok(_) => println!("Transaction updated successfully."),
                    Err(e) => println!("Error updating transaction: {}", e),
                }
            }
            UserCommands::Remove => {
                println!("Provide the transaction ID to remove:");
                let Some(id) = read_user_input()? else { break };
                println!("Are you sure you want to delete this transaction? (y/n)");
                let Some(answer) = read_user_input()? else { break };
                if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
                    println!("Nothing removed.");
                    continue;
                }
                match remove_transaction_from_store(&store, &id) {
                    Ok(_) => println!("Transaction removed successfully."),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::Print => match store.list_all() {
                Ok(transactions) => print_transactions(&transactions),
                Err(e) => println!("Error reading transactions: {}", e),
            },
            UserCommands::Search => {
                println!("Keyword in description (blank to skip):");
                let Some(keyword) = read_user_input()? else { break };
                println!("Category (blank to skip):");
                let Some(category) = read_user_input()? else { break };
                println!("Date YYYY-MM-DD (blank to skip):");
                let Some(date) = read_user_input()? else { break };

                match store.search(&SearchCriteria::new(&keyword, &category, &date)) {
                    Ok(transactions) if transactions.is_empty() => println!("No matching transactions."),
                    Ok(transactions) => print_transactions(&transactions),
                    Err(e) => println!("Error searching transactions: {}", e),
                }
            }
            UserCommands::Sort => {
                let order = match SortOrder::parse(parts.get(1).copied().unwrap_or("")) {
                    Some(order) => order,
                    None => {
                        println!("Use 'sort', 'sort asc' or 'sort desc'.");
                        continue;
                    }
                };
                match store.list_all() {
                    Ok(transactions) => print_transactions(&sort_by_date(&transactions, order)),
                    Err(e) => println!("Error reading transactions: {}", e),
                }
            }
            UserCommands::Summary => match store.list_all() {
                Ok(transactions) => {
                    let summary = summarize(&transactions);
                    println!("{}", render_summary(&summary, &config.currency));
                    if summary.skipped > 0 {
                        println!("Warning: {} malformed row(s) were left out of the summary.", summary.skipped);
                    }
                }
                Err(e) => println!("Error reading transactions: {}", e),
            },
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => {
                println!("Unknown command '{}'.", parts[0]);
            }
        }
    }

    Ok(())
}

// None once stdin is closed
fn read_user_input() -> io::Result<Option<String>> {
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn check_for_command(input: &str) -> UserCommands {
    match input.to_lowercase().as_str() {
        "add" => UserCommands::Add,
        "update" | "edit" => UserCommands::Update,
        "remove" | "delete" => UserCommands::Remove,
        "print" | "list" => UserCommands::Print,
        "search" => UserCommands::Search,
        "sort" => UserCommands::Sort,
        "summary" => UserCommands::Summary,
        "exit" | "quit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}

fn print_transactions(transactions: &[Transaction]) {
    if transactions.is_empty() {
        println!("No transactions recorded.");
        return;
    }
    println!(
        "{:<36}  {:<10}  {:<7}  {:<30}  {:<15}  {:>12}",
        "ID", "Date", "Type", "Description", "Category", "Amount"
    );
    for transaction in transactions {
        println!(
            "{:<36}  {:<10}  {:<7}  {:<30}  {:<15}  {:>12}",
            transaction.id.to_string(),
            transaction.date,
            transaction.transaction_type.as_str(),
            transaction.description,
            transaction.category,
            transaction.amount
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_for_command() {
        assert!(matches!(check_for_command("add"), UserCommands::Add));
        assert!(matches!(check_for_command("DELETE"), UserCommands::Remove));
        assert!(matches!(check_for_command("list"), UserCommands::Print));
        assert!(matches!(check_for_command("summary"), UserCommands::Summary));
        assert!(matches!(check_for_command("frobnicate"), UserCommands::Unknown));
    }
}
