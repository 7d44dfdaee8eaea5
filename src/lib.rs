//! Hanzi Cards CLI
//!
//! 共通ライブラリのデッキモデルを端末から操作する

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
pub mod translator;
