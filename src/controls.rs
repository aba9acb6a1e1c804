//! Slider state for the six tile-blend parameters
//!
//! Keyboard commands move a selection cursor over the sliders and nudge the
//! selected value by one step. Values always stay inside the slider range.

use tileblend_config::Config;
use tileblend_core::{Resolution, TileBlendParams, Variant, Wave};
use tileblend_renderer::TileBlendUniforms;

use crate::commands::Command;

/// Which parameter a slider drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderId {
    Rotation,
    BlendFalloff,
    BlendOffset,
    Scale,
    WaveAmplitude,
    WavePeriod,
}

impl SliderId {
    pub const ALL: [SliderId; 6] = [
        SliderId::Rotation,
        SliderId::BlendFalloff,
        SliderId::BlendOffset,
        SliderId::Scale,
        SliderId::WaveAmplitude,
        SliderId::WavePeriod,
    ];

    fn read(self, params: &TileBlendParams) -> f32 {
        match self {
            SliderId::Rotation => params.rotation,
            SliderId::BlendFalloff => params.blend_falloff,
            SliderId::BlendOffset => params.blend_offset,
            SliderId::Scale => params.scale,
            SliderId::WaveAmplitude => params.wave.amplitude,
            SliderId::WavePeriod => params.wave.period,
        }
    }
}

/// One range input
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub id: SliderId,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
    decimals: usize,
    value: f32,
}

impl Slider {
    const fn new(id: SliderId, label: &'static str, min: f32, max: f32, step: f32, decimals: usize) -> Self {
        Self {
            id,
            label,
            min,
            max,
            step,
            default: min,
            decimals,
            value: min,
        }
    }

    fn with_default(mut self, default: f32) -> Self {
        self.default = self.clamp(default);
        self.value = self.default;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamp into range; NaN falls back to the default
    fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns whether the value changed
    pub fn set(&mut self, value: f32) -> bool {
        let clamped = self.clamp(value);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    pub fn nudge(&mut self, steps: f32) -> bool {
        self.set(self.value + steps * self.step)
    }

    pub fn reset(&mut self) -> bool {
        self.set(self.default)
    }

    /// Value label shown next to the slider
    pub fn display(&self) -> String {
        format!("{}: {:.*}", self.label, self.decimals, self.value)
    }
}

/// Every slider plus the active variant
#[derive(Debug, Clone, PartialEq)]
pub struct ParamControls {
    sliders: Vec<Slider>,
    selected: usize,
    variant: Variant,
}

impl Default for ParamControls {
    fn default() -> Self {
        Self::new(&TileBlendParams::default(), Variant::default())
    }
}

impl ParamControls {
    /// Sliders start at `initial`, which also becomes their reset value
    pub fn new(initial: &TileBlendParams, variant: Variant) -> Self {
        let sliders = vec![
            Slider::new(SliderId::Rotation, "Rotation", 0.0, 1.0, 0.01, 2),
            Slider::new(SliderId::BlendFalloff, "Blend Falloff", 0.0, 50.0, 0.5, 1),
            Slider::new(SliderId::BlendOffset, "Blend Offset", 0.0, 5.0, 0.05, 2),
            Slider::new(SliderId::Scale, "Scale", 0.05, 10.0, 0.05, 2),
            Slider::new(SliderId::WaveAmplitude, "Wave Amplitude", 0.0, 1.0, 0.01, 2),
            Slider::new(SliderId::WavePeriod, "Wave Period", 0.1, 10.0, 0.1, 1),
        ]
        .into_iter()
        .map(|s| {
            let initial_value = s.id.read(initial);
            s.with_default(initial_value)
        })
        .collect();

        Self {
            sliders,
            selected: 0,
            variant,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.params(), config.variant())
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, id: SliderId) -> &Slider {
        // Sliders are built from SliderId::ALL in order
        &self.sliders[id as usize]
    }

    pub fn selected(&self) -> &Slider {
        &self.sliders[self.selected]
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set(&mut self, id: SliderId, value: f32) -> bool {
        self.sliders[id as usize].set(value)
    }

    pub fn set_variant(&mut self, variant: Variant) -> bool {
        let changed = self.variant != variant;
        self.variant = variant;
        changed
    }

    /// Replace values and defaults, keeping the selection
    pub fn reload(&mut self, config: &Config) -> bool {
        let selected = self.selected;
        let reloaded = Self::from_config(config);
        let changed = reloaded.params() != self.params() || reloaded.variant != self.variant;
        *self = Self { selected, ..reloaded };
        changed
    }

    /// Execute a command; returns whether the frame must be redrawn
    ///
    /// Gallery and quit commands are not slider commands and return false.
    pub fn apply(&mut self, command: Command) -> bool {
        let count = self.sliders.len();
        match command {
            Command::SelectNext => {
                self.selected = (self.selected + 1) % count;
                false
            }
            Command::SelectPrevious => {
                self.selected = (self.selected + count - 1) % count;
                false
            }
            Command::Increase => self.sliders[self.selected].nudge(1.0),
            Command::Decrease => self.sliders[self.selected].nudge(-1.0),
            Command::ResetSelected => self.sliders[self.selected].reset(),
            Command::ResetAll => self
                .sliders
                .iter_mut()
                .fold(false, |changed, s| s.reset() | changed),
            Command::ToggleVariant => self.set_variant(self.variant.toggled()),
            Command::NextImage | Command::PreviousImage | Command::Quit => false,
        }
    }

    pub fn params(&self) -> TileBlendParams {
        let value = |id: SliderId| self.slider(id).value();
        TileBlendParams {
            rotation: value(SliderId::Rotation),
            blend_falloff: value(SliderId::BlendFalloff),
            blend_offset: value(SliderId::BlendOffset),
            scale: value(SliderId::Scale),
            wave: Wave {
                amplitude: value(SliderId::WaveAmplitude),
                period: value(SliderId::WavePeriod),
            },
        }
    }

    pub fn uniforms(&self, resolution: Resolution) -> TileBlendUniforms {
        TileBlendUniforms::new(&self.params(), self.variant.config(), resolution)
    }

    /// Window title: variant, then every value with the selected one bracketed
    pub fn title(&self, prefix: &str) -> String {
        let values: Vec<String> = self
            .sliders
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if i == self.selected {
                    format!("[{}]", s.display())
                } else {
                    s.display()
                }
            })
            .collect();
        format!("{} ({}) - {}", prefix, self.variant.name(), values.join(" | "))
    }
}
