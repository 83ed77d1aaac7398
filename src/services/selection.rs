//! 阅卷人挑选服务 - 业务能力层
//!
//! 只负责"从名单里随机挑两个人"的能力，不碰页面

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AppError;
use crate::models::{Application, Grader};

/// 阅卷人挑选服务
///
/// 持有自己的随机数生成器；传入种子时挑选结果可复现
pub struct GraderSelection {
    rng: StdRng,
}

impl GraderSelection {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// 为一条申请随机挑选两名互不相同的阅卷人
    ///
    /// 先按职位过滤名单（保持原有顺序，重复的 (name, job) 条目视为同一人），
    /// 可选人数不足两人属于配置数据错误。第二次抽取时排除第一个人，
    /// 保证两个结果身份不同——即使名单里存在同名但负责其他职位的条目
    pub fn pick_pair(
        &mut self,
        application: &Application,
        roster: &[Grader],
    ) -> Result<(Grader, Grader)> {
        let mut pool: Vec<&Grader> = Vec::new();
        for grader in roster.iter().filter(|g| g.job == application.job) {
            if !pool.contains(&grader) {
                pool.push(grader);
            }
        }

        if pool.len() < 2 {
            return Err(AppError::NotEnoughGraders {
                job: application.job.clone(),
            }
            .into());
        }

        let first = pool[self.rng.gen_range(0..pool.len())].clone();
        let remaining: Vec<&Grader> = pool.into_iter().filter(|g| **g != first).collect();
        let second = remaining[self.rng.gen_range(0..remaining.len())].clone();

        Ok((first, second))
    }
}
