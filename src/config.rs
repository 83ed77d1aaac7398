/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 浏览器调试端口（需要提前以 --remote-debugging-port 启动并登录 Greenhouse）
    pub browser_debug_port: u16,
    /// Greenhouse 主站地址
    pub main_url: String,
    /// 阅卷人名单 TOML 文件
    pub roster_file: String,
    /// 等待页面元素的超时时间（秒）
    pub selector_timeout_secs: u64,
    /// 随机种子，设置后挑选结果可复现（调试用）
    pub selection_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 分配记录输出文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_debug_port: 9222,
            main_url: "https://app.greenhouse.io/".to_string(),
            roster_file: "graders.toml".to_string(),
            selector_timeout_secs: 30,
            selection_seed: None,
            verbose_logging: false,
            output_log_file: "assignments.log".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.browser_debug_port),
            main_url: std::env::var("MAIN_URL").unwrap_or(default.main_url),
            roster_file: std::env::var("ROSTER_FILE").unwrap_or(default.roster_file),
            selector_timeout_secs: std::env::var("SELECTOR_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.selector_timeout_secs),
            selection_seed: std::env::var("SELECTION_SEED").ok().and_then(|v| v.parse().ok()),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 笔试待处理列表页地址
    ///
    /// 固定按最近活动倒序排列，只看 Written Interview 阶段的申请
    pub fn listing_url(&self) -> String {
        format!(
            "{}people?sort_by=last_activity&sort_order=desc&stage_status_id%5B%5D=2&in_stages%5B%5D=Written+Interview",
            self.main_url
        )
    }
}
