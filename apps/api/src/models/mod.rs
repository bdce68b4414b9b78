pub mod benchmark;
pub mod match_row;
