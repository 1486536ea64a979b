// src/application/services/mod.rs
pub mod bridge_service;
pub mod bridge_service_impl;
pub mod factory;
