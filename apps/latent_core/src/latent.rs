//! 空 Latent
//!
//! 形状: [batch, 4, height / 8, width / 8], float32, 全零

use candle_core::{DType, Device, Tensor};

use crate::{error::Error, resolution::ResolvedSize};

/// Latent 通道数
pub const LATENT_CHANNELS: usize = 4;
/// VAE 下采样倍数
pub const LATENT_DOWNSCALE: usize = 8;

#[derive(Debug, Clone)]
pub struct EmptyLatent {
    samples: Tensor,
}

impl EmptyLatent {
    pub fn new(batch_size: usize, width: usize, height: usize, device: &Device) -> Result<Self, Error> {
        let samples = Tensor::zeros(
            (
                batch_size,
                LATENT_CHANNELS,
                height / LATENT_DOWNSCALE,
                width / LATENT_DOWNSCALE,
            ),
            DType::F32,
            device,
        )?;
        Ok(Self { samples })
    }

    pub fn from_size(size: &ResolvedSize, device: &Device) -> Result<Self, Error> {
        Self::new(size.batch_size, size.width, size.height, device)
    }

    pub fn samples(&self) -> &Tensor {
        &self.samples
    }

    pub fn into_samples(self) -> Tensor {
        self.samples
    }
}

/// 节点输出
#[derive(Debug, Clone)]
pub struct LatentOutput {
    pub latent: EmptyLatent,
    pub width: usize,
    pub height: usize,
}
