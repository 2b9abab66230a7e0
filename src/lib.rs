// Library exports for integration tests and external use

pub mod config;
pub mod coordinators;
pub mod errors;
pub mod providers;
pub mod types;
pub mod views;

#[cfg(test)]
pub mod test;
