//! 图文匹配服务 - 业务能力层
//!
//! 逐页把嵌入图片归属到纵向最近的题号标签，裁剪落盘，
//! 并把每张图片的结果（成功路径 / 失败原因）汇总成报告。
//! 报告以不可变值传给装配层，不存在跨阶段共享的可变状态。

use crate::config::Config;
use crate::infrastructure::PdfSource;
use crate::models::{PositionedWord, QuestionLabel};
use crate::services::segmenter;
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 题号标签单词的严格形态：纯数字加分隔符，如 "12." / "12.-" / "3-"
///
/// 混有其他字符的数字串不是标签
const LABEL_PATTERN: &str = r"^(\d+)[.\-]+$";

/// 单张图片的处理结果
#[derive(Debug, Clone)]
pub enum CropOutcome {
    /// 裁剪保存成功，记录题号与相对路径
    Saved { question_id: u32, rel_path: String },
    /// 渲染或保存失败，记录题号与原因；不影响后续图片
    Failed { question_id: u32, reason: String },
}

/// 图文匹配报告
///
/// 按处理顺序保存全部图片结果；同一题号后写覆盖先写
#[derive(Debug, Default)]
pub struct AssociationReport {
    pub outcomes: Vec<CropOutcome>,
}

impl AssociationReport {
    /// 题号 → 图片相对路径映射（后写的覆盖先写的）
    pub fn path_map(&self) -> BTreeMap<u32, String> {
        let mut map = BTreeMap::new();
        for outcome in &self.outcomes {
            if let CropOutcome::Saved {
                question_id,
                rel_path,
            } = outcome
            {
                map.insert(*question_id, rel_path.clone());
            }
        }
        map
    }

    /// 成功关联图片的题目数
    pub fn matched_count(&self) -> usize {
        self.path_map().len()
    }

    /// 保存失败的图片数
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CropOutcome::Failed { .. }))
            .count()
    }
}

/// 图文匹配服务
pub struct ImageAssociator {
    min_width: f64,
    min_height: f64,
    tolerance: f64,
    images_dir: PathBuf,
    rel_dir: String,
}

impl ImageAssociator {
    /// 按配置创建服务；图片目录位于输出文件同级目录下
    pub fn new(config: &Config) -> Self {
        let output_dir = Path::new(&config.output_path)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            min_width: config.min_image_width,
            min_height: config.min_image_height,
            tolerance: config.label_tolerance,
            images_dir: output_dir.join(&config.images_dir_name),
            rel_dir: config.images_dir_name.clone(),
        }
    }

    /// 扫描全部页面，完成匹配与落盘
    ///
    /// 扫描到答案区即停止；尺寸不足或无归属标签的图片直接丢弃；
    /// 单张图片失败只记入报告，不中断页面或整次运行
    pub fn run(&self, source: &PdfSource) -> Result<AssociationReport> {
        std::fs::create_dir_all(&self.images_dir).with_context(|| {
            format!("无法创建图片目录: {}", self.images_dir.display())
        })?;

        let mut outcomes = Vec::new();
        let mut in_answer_section = false;

        source.for_each_page(|snapshot, renderer| {
            if in_answer_section {
                return Ok(());
            }
            if segmenter::is_answer_section_start(&snapshot.text) {
                debug!("第 {} 页进入答案区，图文匹配结束", snapshot.index + 1);
                in_answer_section = true;
                return Ok(());
            }

            let labels = collect_labels(&snapshot.words)?;
            for region in &snapshot.images {
                if region.bbox.width() < self.min_width
                    || region.bbox.height() < self.min_height
                {
                    // 过滤装饰性小图
                    continue;
                }
                let Some(question_id) =
                    owning_label(&labels, region.bbox.top, self.tolerance)
                else {
                    continue;
                };

                let file_name = format!("q_{}.png", question_id);
                let out_path = self.images_dir.join(&file_name);
                match renderer.save_region(&region.bbox, &out_path) {
                    Ok(()) => {
                        debug!(
                            "✓ 题目 {} 的图片已保存: {}",
                            question_id,
                            out_path.display()
                        );
                        outcomes.push(CropOutcome::Saved {
                            question_id,
                            rel_path: format!("{}/{}", self.rel_dir, file_name),
                        });
                    }
                    Err(e) => {
                        warn!("⚠️ 题目 {} 的图片保存失败: {}", question_id, e);
                        outcomes.push(CropOutcome::Failed {
                            question_id,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            Ok(())
        })?;

        Ok(AssociationReport { outcomes })
    }
}

/// 从页面单词中收集题号标签，按 top 升序排列
pub fn collect_labels(words: &[PositionedWord]) -> Result<Vec<QuestionLabel>> {
    let label_re = Regex::new(LABEL_PATTERN)?;
    let mut labels: Vec<QuestionLabel> = words
        .iter()
        .filter_map(|word| {
            let caps = label_re.captures(&word.text)?;
            let id = caps.get(1)?.as_str().parse::<u32>().ok()?;
            if id == 0 {
                return None;
            }
            Some(QuestionLabel {
                id,
                top: word.bbox.top,
                bottom: word.bbox.bottom,
            })
        })
        .collect();
    labels.sort_by(|a, b| a.top.total_cmp(&b.top));
    Ok(labels)
}

/// 找到图片的归属标签
///
/// 候选条件：`image_top >= label.top - tolerance`；
/// 在候选中取最后一个"其后继标签（若有）top 严格大于 image_top"的标签，
/// 即图片尚未越过的、纵向最近的前置标签。无候选返回 None。
pub fn owning_label(
    labels: &[QuestionLabel],
    image_top: f64,
    tolerance: f64,
) -> Option<u32> {
    for (k, label) in labels.iter().enumerate() {
        if image_top < label.top - tolerance {
            continue;
        }
        match labels.get(k + 1) {
            Some(next) if image_top >= next.top => continue,
            _ => return Some(label.id),
        }
    }
    None
}
