//! Axum 的 web api
//!
//! 区分成多个模块，作为多个API组:
//!
//! - `welcome`: 欢迎页 (核心)
//! - `heartbeat`: 运维探活

pub mod welcome;
pub mod heartbeat;
