pub mod commands;
pub mod connection;
pub mod queries;
#[cfg(test)]
pub mod schema;
