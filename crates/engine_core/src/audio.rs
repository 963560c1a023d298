// crates/engine_core/src/audio.rs

use std::any::Any;

use cpal::traits::{DeviceTrait, HostTrait};
use engine_modules::Module;
use thiserror::Error;
use tracing::info;

/// Speaker layouts the mastering output can be opened with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    Mono,
    #[default]
    Stereo,
    StereoLfe,
    Quadraphonic,
    Surround5_0,
    Surround5_1,
    Surround6_1,
    Surround7_1,
}

impl ChannelLayout {
    /// Number of output channels the layout occupies.
    pub fn channels(self) -> u16 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::StereoLfe => 3,
            ChannelLayout::Quadraphonic => 4,
            ChannelLayout::Surround5_0 => 5,
            ChannelLayout::Surround5_1 => 6,
            ChannelLayout::Surround6_1 => 7,
            ChannelLayout::Surround7_1 => 8,
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no default audio output device")]
    NoOutputDevice,

    #[error("failed to query output configuration: {0}")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),
}

/// Default-host audio output device with a master volume.
///
/// Mixing and stream playback live elsewhere; this module owns the native
/// device handle and the mastering parameters.
pub struct AudioDevice {
    device: cpal::Device,
    sample_rate: u32,
    layout: ChannelLayout,
    master_volume: f32,
}

impl AudioDevice {
    pub fn new(layout: ChannelLayout) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        Ok(Self {
            device,
            sample_rate: config.sample_rate().0,
            layout,
            master_volume: 1.0,
        })
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Clamped to `0.0..=1.0`.
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }
}

impl Module for AudioDevice {
    fn load(&mut self) {
        let name = self
            .device
            .name()
            .unwrap_or_else(|_| "<unknown>".to_string());
        info!(
            device = %name,
            channels = self.layout.channels(),
            sample_rate = self.sample_rate,
            "audio device ready",
        );
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_layouts_map_to_channel_counts() {
        assert_eq!(ChannelLayout::Mono.channels(), 1);
        assert_eq!(ChannelLayout::Stereo.channels(), 2);
        assert_eq!(ChannelLayout::StereoLfe.channels(), 3);
        assert_eq!(ChannelLayout::Surround5_1.channels(), 6);
        assert_eq!(ChannelLayout::Surround7_1.channels(), 8);
    }

    #[test]
    fn default_layout_is_stereo() {
        assert_eq!(ChannelLayout::default(), ChannelLayout::Stereo);
    }
}
