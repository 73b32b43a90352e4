pub mod reviewer;
