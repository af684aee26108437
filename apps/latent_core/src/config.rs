//! 节点默认参数
//!
//! 宿主负责持久化配置, 这里只维护控件的默认值与取值范围,
//! 控件声明和请求解析都从同一份配置派生。

use crate::preset::DEFAULT_PRESET;

/// 整数控件的取值范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub default: i64,
    pub min: i64,
    pub max: i64,
    /// 步长, None 表示使用宿主默认步长
    pub step: Option<i64>,
}

/// 选择器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// 默认预设
    pub default_preset: &'static str,
    /// 默认开启比例锁定
    pub ratio_lock: bool,
    pub width: IntRange,
    pub height: IntRange,
    pub batch_size: IntRange,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_preset: DEFAULT_PRESET,
            ratio_lock: true,
            width: IntRange {
                default: 832,
                min: 64,
                max: 16384,
                step: Some(8),
            },
            height: IntRange {
                default: 1216,
                min: 64,
                max: 16384,
                step: Some(8),
            },
            batch_size: IntRange {
                default: 1,
                min: 1,
                max: 64,
                step: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::find_preset;

    #[test]
    fn test_defaults_follow_default_preset() -> anyhow::Result<()> {
        let config = SelectorConfig::default();
        let preset = find_preset(config.default_preset)?;

        assert_eq!(config.width.default, preset.width as i64);
        assert_eq!(config.height.default, preset.height as i64);
        assert!(config.ratio_lock);
        Ok(())
    }

    #[test]
    fn test_batch_range() {
        let config = SelectorConfig::default();
        assert_eq!((config.batch_size.min, config.batch_size.max), (1, 64));
        assert_eq!(config.batch_size.step, None);
    }
}
