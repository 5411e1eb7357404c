/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use tracing::{info, warn};

/// 记录服务启动信息
///
/// # 参数
/// - `config`: 程序配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 数学辅导服务启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 监听地址: http://{}", config.bind_addr());
    info!("🧮 解题模型: {}", config.solve_model);
    info!("🖼️ 视觉模型: {}", config.vision_model);
    info!("🔗 上游地址: {}", config.openai_api_base);
    info!("{}", "=".repeat(60));

    if config.openai_api_key.trim().is_empty() {
        warn!("⚠️ 未设置 OPENAI_API_KEY，上游调用将会失败");
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        // 按字符而不是字节截断
        assert_eq!(truncate_text("一二三四", 2), "一二...");
    }
}
