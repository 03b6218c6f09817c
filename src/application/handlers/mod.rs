pub mod score_handler;
