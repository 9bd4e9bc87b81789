//! 姓名拆分器
//!
//! 将多行文本按行拆分为 `NameRecord`：首个空白分隔的词作为名，其余词以单个空格拼接作为姓

use serde::{Deserialize, Serialize};

/// 单行拆分结果
///
/// 序列化字段名与历史记录 JSON 列保持一致（`original` / `firstName` / `lastName`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// 去除首尾空白后的原始行
    pub original: String,
    pub first_name: String,
    /// 只有一个词时为空字符串
    pub last_name: String,
}

/// Unicode 空白外加 BOM（U+FEFF）
#[inline]
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

fn trim_blank(line: &str) -> &str {
    line.trim_matches(is_blank)
}

/// 拆分单行
///
/// 调用方负责过滤空行；即便传入空白行也不会失败，此时名和姓均为空
pub fn split_line(line: &str) -> NameRecord {
    let original = trim_blank(line);
    let mut tokens = original.split(is_blank).filter(|token| !token.is_empty());

    let (first_name, last_name) = match tokens.next() {
        // 空行过滤后不可达，保留以保证函数全域有定义
        None => (String::new(), String::new()),
        Some(first) => (first.to_string(), tokens.collect::<Vec<_>>().join(" ")),
    };

    NameRecord {
        original: original.to_string(),
        first_name,
        last_name,
    }
}

/// 拆分整段文本
///
/// - 按换行拆分，丢弃 trim 后为空的行
/// - 输出顺序与输入行顺序一致，不排序、不去重
pub fn split_names(text: &str) -> Vec<NameRecord> {
    text.lines()
        .filter(|line| !trim_blank(line).is_empty())
        .map(split_line)
        .collect()
}
