pub mod config;
pub mod domain;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
pub mod utils;
