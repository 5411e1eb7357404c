//! 题目文本

use percent_encoding::percent_decode_str;
use std::fmt;

/// 从题目两端剥离的字符
const STRIP_CHARS: &[char] = &['"', ','];

/// 用户提交的题目文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// 解题接口的题目
    ///
    /// HTTP 层已经对查询参数解码过一次，这里再做一次百分号解码，
    /// 然后去掉两端任意数量的 `"` 和 `,`。非法的 UTF-8 序列会被替换为 U+FFFD。
    pub fn decode(raw: &str) -> Self {
        let decoded = percent_decode_str(raw).decode_utf8_lossy();
        Self(decoded.trim_matches(STRIP_CHARS).to_string())
    }

    /// 原样使用查询参数（提示 / 批改接口）
    pub fn verbatim(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_quotes_and_commas() {
        assert_eq!(Question::decode("\"What is 2+2?\"").as_str(), "What is 2+2?");
        assert_eq!(Question::decode(",\"x = 1\",,").as_str(), "x = 1");
    }

    #[test]
    fn test_decode_percent_encoding() {
        assert_eq!(
            Question::decode("%22What%20is%202%2B2%3F%22").as_str(),
            "What is 2+2?"
        );
        // `+` 不会被当作空格
        assert_eq!(Question::decode("1+1").as_str(), "1+1");
    }

    #[test]
    fn test_decode_keeps_inner_quotes() {
        assert_eq!(
            Question::decode("\"solve \"x\", then y\"").as_str(),
            "solve \"x\", then y"
        );
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        assert_eq!(Question::decode("a%FFb").as_str(), "a\u{FFFD}b");
    }

    #[test]
    fn test_verbatim_keeps_everything() {
        assert_eq!(Question::verbatim("\"%20\"").as_str(), "\"%20\"");
    }
}
