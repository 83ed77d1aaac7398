//! 申请处理上下文
//!
//! 封装"我正在处理第几条申请、当前操作者是谁"这一信息

use std::fmt::Display;

/// 申请处理上下文
#[derive(Debug, Clone)]
pub struct AssignmentCtx {
    /// 申请序号（仅用于日志显示，从 1 开始）
    pub index: usize,

    /// 当前操作者显示名，运行开始时解析一次
    pub current_operator: String,
}

impl AssignmentCtx {
    pub fn new(index: usize, current_operator: String) -> Self {
        Self {
            index,
            current_operator,
        }
    }
}

impl Display for AssignmentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[申请 {}]", self.index)
    }
}
