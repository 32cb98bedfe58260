//! Runtime configuration and startup data models.

pub mod config;
pub mod seed;
