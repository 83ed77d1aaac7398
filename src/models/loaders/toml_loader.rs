//! 阅卷人名单加载
//!
//! 名单是一个 TOML 文件，包含本次运行关心的职位集合与阅卷人列表：
//!
//! ```toml
//! jobs = ["Backend Engineer", "Data Scientist"]
//!
//! [[graders]]
//! name = "Alice"
//! job = "Backend Engineer"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::grader::Grader;

/// 阅卷人名单：阅卷人列表 + 本次运行的职位过滤集合
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    pub jobs: Vec<String>,
    pub graders: Vec<Grader>,
}

/// 从 TOML 文件加载名单
pub async fn load_roster(path: &str) -> Result<Roster> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取阅卷人名单: {}", path))?;

    let roster = parse_roster(&content)?;
    info!(
        "✓ 已加载名单: {} 名阅卷人, {} 个职位",
        roster.graders.len(),
        roster.jobs.len()
    );
    Ok(roster)
}

/// 解析并校验名单内容
///
/// 职位集合与阅卷人列表都必须非空；
/// 职位不在集合内的阅卷人永远不会被选中，只告警不报错
pub fn parse_roster(content: &str) -> Result<Roster> {
    let roster: Roster = toml::from_str(content)?;

    if roster.jobs.is_empty() {
        return Err(AppError::Roster("jobs 不能为空".to_string()).into());
    }
    if roster.graders.is_empty() {
        return Err(AppError::Roster("graders 不能为空".to_string()).into());
    }

    for grader in &roster.graders {
        if !roster.jobs.contains(&grader.job) {
            warn!(
                "⚠️ 阅卷人 {} 的职位 {} 不在本次运行的职位集合内，不会被选中",
                grader.name, grader.job
            );
        }
    }

    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
jobs = ["Backend Engineer", "Data Scientist"]

[[graders]]
name = "Alice"
job = "Backend Engineer"

[[graders]]
name = "Bob"
job = "Data Scientist"
"#;

    #[test]
    fn test_parse_roster_sample() {
        let roster = parse_roster(SAMPLE).expect("示例名单应当解析成功");
        assert_eq!(roster.jobs.len(), 2);
        assert_eq!(roster.graders.len(), 2);
        assert_eq!(roster.graders[0].name, "Alice");
        assert_eq!(roster.graders[0].job, "Backend Engineer");
    }

    #[test]
    fn test_parse_roster_rejects_empty_jobs() {
        let content = r#"
jobs = []

[[graders]]
name = "Alice"
job = "Backend Engineer"
"#;
        let err = parse_roster(content).expect_err("空职位集合应当报错");
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Roster(_))
        ));
    }

    #[test]
    fn test_parse_roster_rejects_empty_graders() {
        let content = r#"
jobs = ["Backend Engineer"]
graders = []
"#;
        let err = parse_roster(content).expect_err("空阅卷人列表应当报错");
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Roster(_))
        ));
    }

    #[test]
    fn test_parse_roster_rejects_bad_toml() {
        assert!(parse_roster("jobs = [").is_err());
    }
}
