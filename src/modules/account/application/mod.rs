pub mod account_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use account_use_cases::AccountUseCases;
