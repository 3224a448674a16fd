//! 视图层
//!
//! 处理器构造视图模型(`ViewModel`)，渲染层把它插值进HTML文档

pub mod model;
pub mod render;
