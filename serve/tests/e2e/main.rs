mod common;

mod health;
mod invalid_body;
mod parse_failure;
mod recommend_ok;
