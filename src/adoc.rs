//! Main module for adocfmt library functionality

pub mod ast;
pub mod building;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod token;
