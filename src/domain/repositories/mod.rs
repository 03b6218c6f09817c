pub mod grammar_checker;
