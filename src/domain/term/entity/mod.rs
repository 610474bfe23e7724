pub mod used_term;
