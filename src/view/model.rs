//! 视图模型
//!
//! 处理器与渲染层之间传递的键值结构

use std::collections::BTreeMap; // 有序map，迭代顺序稳定

/// 视图模型: 命名属性的有序集合
///
/// 特性：
/// - 键为固定标识字符串，值为本次请求生成的字符串
/// - 仅在单次请求/响应周期内存活，不跨请求共享，无需加锁
/// - 迭代顺序 = 键的字典序 (渲染结果因此可复现)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    attrs: BTreeMap<String, String>,
}

impl ViewModel {
    /// 创建空模型
    pub fn new() -> Self {
        ViewModel::default()
    }

    /// 写入属性 (重复策略：覆盖，并返回旧值)
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attrs.insert(key.into(), value.into())
    }

    /// 读取属性
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// 是否存在指定属性
    pub fn contains_key(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// 按键序遍历属性
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
