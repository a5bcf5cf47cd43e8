pub mod assembler;
pub mod config;
pub mod engine;
pub mod projector;
