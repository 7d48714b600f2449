pub mod save_match;
