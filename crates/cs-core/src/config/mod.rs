//! # Pure Data Module / 纯数据模块
//!
//! Configuration data structures and the TOML → DTO mapping.
//! 配置数据结构以及 TOML → DTO 的映射。
//!
//! Values are taken as-is. Interpreting them (parsing the modifier list,
//! clamping intervals) is left to the code that consumes them.

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_POLL_INTERVAL_MS, DEFAULT_RESTORE_DELAY_MS, DEFAULT_RESTORE_SETTLE_MS,
};
