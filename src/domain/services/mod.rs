// src/domain/services/mod.rs
pub mod broadcast;
pub mod transport;
