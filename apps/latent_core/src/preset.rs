//! 分辨率预设
//!
//! 预设名称格式: `<方向图标> <宽>×<高> (<系列 - 宽高比>)`
//! - ▯ 竖版
//! - □ 正方形
//! - ▭ 横版
//!
//! 列表顺序即控件中的选项顺序, 不可在运行时修改。

use indexmap::IndexMap;
use lazy_static::lazy_static;
use strum_macros::{Display, EnumIter};

use crate::error::Error;

/// 默认预设
pub const DEFAULT_PRESET: &str = "▯ 832×1216 (SDXL - 2:3)";

/// 预设系列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum PresetFamily {
    #[strum(to_string = "SD 1.5")]
    Sd15,
    #[strum(to_string = "SDXL")]
    Sdxl,
    #[strum(to_string = "HD/FHD")]
    Hd,
}

/// 画面方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Orientation {
    #[strum(to_string = "▯")]
    Portrait,
    #[strum(to_string = "□")]
    Square,
    #[strum(to_string = "▭")]
    Landscape,
}

/// 分辨率预设
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPreset {
    pub label: &'static str,
    pub width: usize,
    pub height: usize,
    pub family: PresetFamily,
}

impl ResolutionPreset {
    const fn new(label: &'static str, width: usize, height: usize, family: PresetFamily) -> Self {
        Self {
            label,
            width,
            height,
            family,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self.width.cmp(&self.height) {
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
            std::cmp::Ordering::Greater => Orientation::Landscape,
        }
    }

    /// 宽高比 (宽 / 高)
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

pub const RESOLUTION_PRESETS: &[ResolutionPreset] = &[
    // SD 1.5
    ResolutionPreset::new("▯ 512×896 (9:16)", 512, 896, PresetFamily::Sd15),
    ResolutionPreset::new("▯ 512×768 (2:3)", 512, 768, PresetFamily::Sd15),
    ResolutionPreset::new("▯ 480×640 (3:4)", 480, 640, PresetFamily::Sd15),
    ResolutionPreset::new("□ 512×512 (1:1)", 512, 512, PresetFamily::Sd15),
    ResolutionPreset::new("▭ 640×480 (4:3)", 640, 480, PresetFamily::Sd15),
    ResolutionPreset::new("▭ 768×512 (3:2)", 768, 512, PresetFamily::Sd15),
    ResolutionPreset::new("▭ 896×512 (16:9)", 896, 512, PresetFamily::Sd15),
    // SDXL
    ResolutionPreset::new("▯ 640×1536 (SDXL - 9:21)", 640, 1536, PresetFamily::Sdxl),
    ResolutionPreset::new("▯ 768×1344 (SDXL - 9:16)", 768, 1344, PresetFamily::Sdxl),
    ResolutionPreset::new("▯ 832×1216 (SDXL - 2:3)", 832, 1216, PresetFamily::Sdxl),
    ResolutionPreset::new("▯ 896×1152 (SDXL - 3:4)", 896, 1152, PresetFamily::Sdxl),
    ResolutionPreset::new("□ 1024×1024 (SDXL - 1:1)", 1024, 1024, PresetFamily::Sdxl),
    ResolutionPreset::new("▭ 1152×896 (SDXL - 4:3)", 1152, 896, PresetFamily::Sdxl),
    ResolutionPreset::new("▭ 1216×832 (SDXL - 3:2)", 1216, 832, PresetFamily::Sdxl),
    ResolutionPreset::new("▭ 1344×768 (SDXL - 16:9)", 1344, 768, PresetFamily::Sdxl),
    ResolutionPreset::new("▭ 1536×640 (SDXL - 21:9)", 1536, 640, PresetFamily::Sdxl),
    // HD/FHD
    ResolutionPreset::new("▯ 1080×1920 (FHD - 9:16)", 1080, 1920, PresetFamily::Hd),
    ResolutionPreset::new("▯ 720×1280 (HD - 9:16)", 720, 1280, PresetFamily::Hd),
    ResolutionPreset::new("▭ 1280×720 (HD - 16:9)", 1280, 720, PresetFamily::Hd),
    ResolutionPreset::new("▭ 1920×1080 (FHD - 16:9)", 1920, 1080, PresetFamily::Hd),
];

// 名称 -> 下标
lazy_static! {
    static ref PRESET_INDEX: IndexMap<&'static str, usize> = RESOLUTION_PRESETS
        .iter()
        .enumerate()
        .map(|(index, preset)| (preset.label, index))
        .collect();
}

/// 按名称查找预设
pub fn find_preset(label: &str) -> Result<&'static ResolutionPreset, Error> {
    PRESET_INDEX
        .get(label)
        .map(|index| &RESOLUTION_PRESETS[*index])
        .ok_or_else(|| Error::PresetNotFound(label.to_string()))
}

/// 控件选项列表
pub fn preset_labels() -> Vec<String> {
    RESOLUTION_PRESETS
        .iter()
        .map(|preset| preset.label.to_string())
        .collect()
}

/// 指定系列的全部预设
pub fn presets_by_family(family: PresetFamily) -> impl Iterator<Item = &'static ResolutionPreset> {
    RESOLUTION_PRESETS
        .iter()
        .filter(move |preset| preset.family == family)
}
