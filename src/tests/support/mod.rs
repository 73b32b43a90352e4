pub mod account_fixtures;
pub mod app_state_builder;
pub mod fake_hasher;
pub mod in_memory_store;
pub mod stubs;
