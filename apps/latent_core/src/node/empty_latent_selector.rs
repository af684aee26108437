//! 高级空 Latent 选择器
//!
//! 从预设或自定义宽高生成空 Latent, 同时输出最终宽高

use candle_core::Device;
use strum::IntoEnumIterator;

use crate::{
    config::{IntRange, SelectorConfig},
    error::Error,
    latent::{EmptyLatent, LatentOutput},
    node::NodeDefinition,
    preset::preset_labels,
    resolution::{resolve, LatentRequest, Mode},
    schema::{
        types::{NODE_INT, NODE_LATENT},
        InputSpec, InputType, OutputSpec,
    },
};

/// 节点分类
pub const CATEGORY_LATENT: &str = "latent";

pub struct EmptyLatentSelector {
    config: SelectorConfig,
    device: Device,
}

impl Default for EmptyLatentSelector {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl EmptyLatentSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            device: Device::Cpu,
        }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// 生成空 Latent
    pub fn generate(&self, request: &LatentRequest) -> Result<LatentOutput, Error> {
        let size = resolve(request)?;
        let latent = EmptyLatent::from_size(&size, &self.device)?;

        Ok(LatentOutput {
            latent,
            width: size.width,
            height: size.height,
        })
    }

    /// 按配置构建控件声明
    pub fn input_spec_with(config: &SelectorConfig) -> InputSpec {
        let int_input = |range: &IntRange| {
            let input = InputType::int()
                .default(range.default)
                .min(range.min)
                .max(range.max);
            match range.step {
                Some(step) => input.step(step),
                None => input,
            }
        };

        InputSpec::new()
            .with_required(
                "Resolution",
                InputType::list(preset_labels()).default(config.default_preset),
            )
            .with_required(
                "Mode",
                InputType::list(Mode::iter().map(|mode| mode.to_string()).collect())
                    .default(Mode::UsePreset.to_string()),
            )
            .with_required(
                "Ratio Lock",
                InputType::bool()
                    .default(config.ratio_lock)
                    .label_on("On")
                    .label_off("Off"),
            )
            .with_required("Width", int_input(&config.width))
            .with_required("Height", int_input(&config.height))
            .with_required("Batch Size", int_input(&config.batch_size))
    }
}

impl NodeDefinition for EmptyLatentSelector {
    const NODE_ID: &'static str = "EmptyLatentAdvancedSelector";
    const DISPLAY_NAME: &'static str = "📐 Empty Latent Advanced";
    const CATEGORY: &'static str = CATEGORY_LATENT;
    const FUNCTION: &'static str = "generate";
    const DESCRIPTION: &'static str =
        "Create an empty latent from a resolution preset, or from a custom width/height with optional ratio lock.";

    fn input_spec() -> InputSpec {
        Self::input_spec_with(&SelectorConfig::default())
    }

    fn output_spec() -> OutputSpec {
        OutputSpec::new()
            .with_output(NODE_LATENT, "Latent")
            .with_output(NODE_INT, "Width")
            .with_output(NODE_INT, "Height")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{preset::DEFAULT_PRESET, schema::ParamValue};

    #[test]
    fn test_generate_preset() -> anyhow::Result<()> {
        let node = EmptyLatentSelector::default();
        let request = LatentRequest {
            resolution: "□ 1024×1024 (SDXL - 1:1)".to_string(),
            batch_size: 2,
            ..Default::default()
        };

        let output = node.generate(&request)?;
        assert_eq!((output.width, output.height), (1024, 1024));
        assert_eq!(output.latent.samples().dims4()?, (2, 4, 128, 128));
        Ok(())
    }

    #[test]
    fn test_generate_override() -> anyhow::Result<()> {
        let node = EmptyLatentSelector::default();
        let request = LatentRequest {
            mode: Mode::Override,
            ratio_lock: true,
            width: 900,
            ..Default::default()
        };

        let output = node.generate(&request)?;
        assert_eq!((output.width, output.height), (896, 1312));
        assert_eq!(output.latent.samples().dims4()?, (1, 4, 164, 112));
        Ok(())
    }

    #[test]
    fn test_generate_unknown_preset() {
        let node = EmptyLatentSelector::default();
        let request = LatentRequest {
            resolution: "unknown".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            node.generate(&request),
            Err(Error::PresetNotFound(_))
        ));
    }

    #[test]
    fn test_input_spec_order() {
        let spec = EmptyLatentSelector::input_spec();
        let names: Vec<&str> = spec.required().iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Resolution", "Mode", "Ratio Lock", "Width", "Height", "Batch Size"]
        );
        assert!(spec.optional().is_empty());
    }

    #[test]
    fn test_input_spec_values() -> anyhow::Result<()> {
        let spec = EmptyLatentSelector::input_spec();
        let value = serde_json::to_value(&spec)?;
        let required = &value["required"];

        assert_eq!(required["Resolution"][0], json!(preset_labels()));
        assert_eq!(required["Resolution"][1], json!({"default": DEFAULT_PRESET}));
        assert_eq!(
            required["Mode"],
            json!([["Use Preset", "Override"], {"default": "Use Preset"}])
        );
        assert_eq!(
            required["Ratio Lock"],
            json!(["BOOLEAN", {"default": true, "label_on": "On", "label_off": "Off"}])
        );
        assert_eq!(
            required["Width"],
            json!(["INT", {"default": 832, "min": 64, "max": 16384, "step": 8}])
        );
        assert_eq!(
            required["Height"],
            json!(["INT", {"default": 1216, "min": 64, "max": 16384, "step": 8}])
        );
        assert_eq!(
            required["Batch Size"],
            json!(["INT", {"default": 1, "min": 1, "max": 64}])
        );
        Ok(())
    }

    #[test]
    fn test_custom_config() {
        let config = SelectorConfig {
            ratio_lock: false,
            ..Default::default()
        };
        let spec = EmptyLatentSelector::input_spec_with(&config);
        assert_eq!(
            spec.get_required("Ratio Lock").and_then(|input| input.param("default")),
            Some(&ParamValue::Bool(false))
        );
    }

    #[test]
    fn test_output_spec() {
        let outputs = EmptyLatentSelector::output_spec();
        assert_eq!(outputs.types, vec!["LATENT", "INT", "INT"]);
        assert_eq!(outputs.names, vec!["Latent", "Width", "Height"]);
    }
}
