pub mod add;
pub mod remove;
pub mod search;
pub mod summary;
pub mod update;
