//! Anagram counting as a library, a CLI (`anagram`) and a small HTTP
//! service (`anagram_server`).

pub mod anagram;
pub mod cli;
pub mod config;
pub mod counters;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
