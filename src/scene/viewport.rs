use eframe::egui::{Pos2, Vec2};

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct ZoomConfig {
    pub button_step: f32,
    pub wheel_sensitivity: f32,
    pub max_wheel_factor: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            button_step: 1.2,
            wheel_sensitivity: 0.0018,
            max_wheel_factor: 1.15,
        }
    }
}

/// Screen coordinates are relative to the canvas origin, not the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub scale: f32,
    pub translate: Vec2,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    pub fn scene_to_screen(&self, scene: Pos2) -> Pos2 {
        (scene.to_vec2() * self.scale + self.translate).to_pos2()
    }

    pub fn screen_to_scene(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.translate) / self.scale).to_pos2()
    }

    pub fn scale_length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Multiplies the scale by `factor`, clamped to `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// With an anchor the scene point under it stays put; without one the
    /// translation is left alone, which zooms about the canvas origin.
    pub fn zoom(&mut self, factor: f32, anchor: Option<Pos2>) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if let Some(anchor) = anchor {
            let scene_anchor = self.screen_to_scene(anchor);
            self.translate = anchor.to_vec2() - scene_anchor.to_vec2() * scale;
        }
        self.scale = scale;
    }

    pub fn zoom_by_wheel(&mut self, wheel_delta: f32, anchor: Pos2, config: &ZoomConfig) {
        if wheel_delta.abs() <= f32::EPSILON {
            return;
        }

        let factor = (1.0 + wheel_delta * config.wheel_sensitivity)
            .clamp(1.0 / config.max_wheel_factor, config.max_wheel_factor);
        self.zoom(factor, Some(anchor));
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.translate += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }
}
