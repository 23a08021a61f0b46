pub mod loader;

pub use loader::{
    date_key_from_filename, load_corpus, load_statements, parse_statement_date,
    read_statement_text,
};
