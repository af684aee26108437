//! 分辨率解析
//!
//! - Use Preset: 直接使用所选预设的宽高
//! - Override + 比例锁定: 宽度取整到 8 的倍数, 高度按所选预设的宽高比推算
//! - Override: 宽高分别取整到 8 的倍数

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::{config::SelectorConfig, error::Error, preset::find_preset};

/// 最小边长
pub const MIN_SIDE: usize = 64;
/// 对齐步长
pub const ALIGNMENT: usize = 8;

/// 尺寸模式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
pub enum Mode {
    #[default]
    #[serde(rename = "Use Preset")]
    #[strum(to_string = "Use Preset")]
    UsePreset,
    #[serde(rename = "Override")]
    #[strum(to_string = "Override")]
    Override,
}

/// 节点输入参数
///
/// 字段名与宿主控件名称一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatentRequest {
    #[serde(rename = "Resolution")]
    pub resolution: String,
    #[serde(rename = "Mode")]
    pub mode: Mode,
    #[serde(rename = "Ratio Lock", default = "default_ratio_lock")]
    pub ratio_lock: bool,
    #[serde(rename = "Width")]
    pub width: i64,
    #[serde(rename = "Height")]
    pub height: i64,
    #[serde(rename = "Batch Size", default = "default_batch_size")]
    pub batch_size: i64,
}

fn default_ratio_lock() -> bool {
    SelectorConfig::default().ratio_lock
}

fn default_batch_size() -> i64 {
    SelectorConfig::default().batch_size.default
}

impl Default for LatentRequest {
    fn default() -> Self {
        let config = SelectorConfig::default();
        Self {
            resolution: config.default_preset.to_string(),
            mode: Mode::default(),
            ratio_lock: config.ratio_lock,
            width: config.width.default,
            height: config.height.default,
            batch_size: config.batch_size.default,
        }
    }
}

/// 解析后的尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSize {
    pub width: usize,
    pub height: usize,
    pub batch_size: usize,
}

/// 取整到最近的 8 的倍数, 最小为 64
///
/// 恰好位于两个倍数中间时取偶数倍, 例如 1204 -> 1200, 1212 -> 1216
pub fn round_to_8(value: f64) -> usize {
    let aligned = (value / ALIGNMENT as f64).round_ties_even() * ALIGNMENT as f64;
    aligned.max(MIN_SIDE as f64) as usize
}

/// 解析最终尺寸
///
/// 任何模式下都需要所选预设存在, 比例锁定依赖它的宽高比
pub fn resolve(request: &LatentRequest) -> Result<ResolvedSize, Error> {
    let preset = find_preset(&request.resolution)?;

    let (width, height) = match request.mode {
        Mode::UsePreset => (preset.width, preset.height),
        Mode::Override if request.ratio_lock => {
            let width = round_to_8(request.width as f64);
            let height = round_to_8(width as f64 / preset.ratio());
            (width, height)
        }
        Mode::Override => (
            round_to_8(request.width as f64),
            round_to_8(request.height as f64),
        ),
    };

    let batch_size = usize::try_from(request.batch_size).map_err(|_| {
        Error::InvalidParameter(format!("batch size {}", request.batch_size))
    })?;

    debug!(
        "resolved {} ({}, ratio lock: {}) -> {}x{} x{}",
        preset.label, request.mode, request.ratio_lock, width, height, batch_size
    );

    Ok(ResolvedSize {
        width,
        height,
        batch_size,
    })
}
