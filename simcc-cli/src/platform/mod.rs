//! Terminal output for the CLI

mod cli;

pub use cli::{
    confirm, print_compilation, print_program, print_program_list, print_source_listing,
    DELETE_PROMPT, EMPTY_LIST_TEXT,
};
