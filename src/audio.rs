//! Sound cues
//!
//! The sim emits `GameEvent`s; this module turns the audible ones into
//! cues and hands them to an output. The browser output synthesizes every
//! cue procedurally with Web Audio, no sample files needed.

use crate::Settings;
use crate::sim::{GameEvent, GameMode};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Round starts
    Swoosh,
    /// Bird flaps
    Flap,
    /// Bird hits a pipe
    Hit,
    /// Bird hits the ground
    Die,
    /// Pipe passed
    Point,
    /// Bird reaches the ground after the round already ended
    Thud,
}

impl SoundEffect {
    /// Cue for an event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ModeChanged {
                to: GameMode::Playing,
                ..
            } => Some(SoundEffect::Swoosh),
            GameEvent::Flapped => Some(SoundEffect::Flap),
            GameEvent::HitPipe => Some(SoundEffect::Hit),
            GameEvent::HitFloor => Some(SoundEffect::Die),
            GameEvent::Landed => Some(SoundEffect::Thud),
            GameEvent::Scored { .. } => Some(SoundEffect::Point),
            GameEvent::ModeChanged { .. } | GameEvent::NewBest { .. } => None,
        }
    }

    /// Per-cue mix level before master/sfx volume
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Hit => 0.1,
            SoundEffect::Thud => 0.05,
            _ => 0.25,
        }
    }
}

/// Something that can play a cue without blocking
pub trait AudioOutput {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Output that only logs (headless/native runs)
#[derive(Debug, Default)]
pub struct LogOutput;

impl AudioOutput for LogOutput {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} @ {:.3}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager {
    output: Box<dyn AudioOutput>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager configured from saved settings
    pub fn from_settings(settings: &Settings, output: Box<dyn AudioOutput>) -> Self {
        let mut audio = Self::new(output);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume() * effect.base_volume();
        if vol <= 0.0 {
            return;
        }
        self.output.play(effect, vol);
    }

    /// Play the cues for a tick's events, in order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudioOutput;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioOutput, SoundEffect};

    /// Web Audio synthesizer
    pub struct WebAudioOutput {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudioOutput {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudioOutput {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Single oscillator sweeping `from -> to` Hz over `dur` seconds
        fn sweep(ctx: &AudioContext, vol: f32, kind: OscillatorType, from: f32, to: f32, dur: f64) {
            let Some((osc, gain)) = Self::create_osc(ctx, from, kind) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.001, t + dur)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + dur)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + dur + 0.05).ok();
        }

        /// Point - two quick rising blips
        fn play_point(ctx: &AudioContext, vol: f32) {
            for (i, freq) in [880.0, 1320.0].iter().enumerate() {
                let delay = i as f64 * 0.07;
                if let Some((osc, gain)) = Self::create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.001, t + 0.1)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.12).ok();
                }
            }
        }
    }

    impl AudioOutput for WebAudioOutput {
        fn play(&mut self, effect: SoundEffect, vol: f32) {
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match effect {
                SoundEffect::Swoosh => {
                    Self::sweep(ctx, vol, OscillatorType::Triangle, 200.0, 700.0, 0.25)
                }
                SoundEffect::Flap => Self::sweep(ctx, vol, OscillatorType::Sine, 300.0, 500.0, 0.08),
                SoundEffect::Hit => Self::sweep(ctx, vol, OscillatorType::Square, 220.0, 80.0, 0.12),
                SoundEffect::Die => {
                    Self::sweep(ctx, vol, OscillatorType::Sawtooth, 400.0, 80.0, 0.5)
                }
                SoundEffect::Point => Self::play_point(ctx, vol),
                SoundEffect::Thud => Self::sweep(ctx, vol, OscillatorType::Sine, 120.0, 50.0, 0.15),
            }
        }
    }
}
