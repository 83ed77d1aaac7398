//! 分配记录写入服务 - 业务能力层
//!
//! 只负责"把一次分配追加进记录文件"的能力，不关心流程

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::models::{Application, Grader};

/// 分配记录写入服务
pub struct RecordWriter {
    record_file_path: String,
}

impl RecordWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_file_path: path.into(),
        }
    }

    /// 追加一条分配记录
    pub fn write(
        &self,
        application: &Application,
        grader1: &Grader,
        grader2: &Grader,
    ) -> Result<()> {
        debug!(
            "写入分配记录: {} | {}",
            application.candidate, application.job
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.record_file_path)?;

        let line = format!(
            "{} | {} | {}, {}\n",
            application.candidate, application.job, grader1.name, grader2.name
        );
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}
