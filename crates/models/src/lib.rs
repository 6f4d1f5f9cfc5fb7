pub mod db;
pub mod employee;
pub mod errors;

#[cfg(test)]
mod tests;
