/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    // --- 上游 LLM 配置 ---
    pub openai_api_key: String,
    pub openai_api_base: String,
    /// 解题使用的纯文本模型
    pub solve_model: String,
    /// 提示 / 批改使用的视觉模型
    pub vision_model: String,
    /// 批改回复的最大 token 数
    pub correction_max_tokens: u32,
    // --- 服务配置 ---
    pub server_host: String,
    pub server_port: u16,
    /// 上传请求体大小上限（字节）
    pub max_upload_bytes: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: String::new(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
            solve_model: "o1-mini".to_string(),
            vision_model: "gpt-4o-mini".to_string(),
            correction_max_tokens: 300,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            max_upload_bytes: 20 * 1024 * 1024,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置（会先尝试加载 `.env`）
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数构建配置，缺失或无法解析的值使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or(default.openai_api_key),
            openai_api_base: lookup("OPENAI_API_BASE").unwrap_or(default.openai_api_base),
            solve_model: lookup("SOLVE_MODEL").unwrap_or(default.solve_model),
            vision_model: lookup("VISION_MODEL").unwrap_or(default.vision_model),
            correction_max_tokens: lookup("CORRECTION_MAX_TOKENS").and_then(|v| v.parse().ok()).unwrap_or(default.correction_max_tokens),
            server_host: lookup("SERVER_HOST").unwrap_or(default.server_host),
            server_port: lookup("SERVER_PORT").and_then(|v| v.parse().ok()).unwrap_or(default.server_port),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES").and_then(|v| v.parse().ok()).unwrap_or(default.max_upload_bytes),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 监听地址，形如 `0.0.0.0:8000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.solve_model, "o1-mini");
        assert_eq!(config.vision_model, "gpt-4o-mini");
        assert_eq!(config.correction_max_tokens, 300);
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.openai_api_key.is_empty());
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("SERVER_PORT", "9001"),
            ("VISION_MODEL", "gpt-4o"),
            ("VERBOSE_LOGGING", "true"),
        ]));

        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.server_port, 9001);
        assert_eq!(config.vision_model, "gpt-4o");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_PORT", "eighty"),
            ("CORRECTION_MAX_TOKENS", "-1"),
        ]));

        assert_eq!(config.server_port, 8000);
        assert_eq!(config.correction_max_tokens, 300);
    }
}
