//! Audio and haptic feedback using the Web Audio and Vibration APIs
//!
//! Cues are synthesized on the fly, so no sound files ship with the game.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::feedback::{FeedbackCue, FeedbackSink};
use crate::settings::FeedbackSettings;

/// Browser feedback sink
pub struct AudioFeedback {
    ctx: Option<AudioContext>,
    settings: FeedbackSettings,
}

impl AudioFeedback {
    pub fn new(settings: FeedbackSettings) -> Self {
        // Fails outside secure contexts
        let ctx = if settings.sound {
            AudioContext::new().ok()
        } else {
            None
        };
        if settings.sound && ctx.is_none() {
            log::warn!("Failed to create AudioContext - sound disabled");
        }
        Self { ctx, settings }
    }

    fn play(&self, cue: FeedbackCue) {
        let vol = self.settings.volume;
        if !self.settings.sound || vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match cue {
            FeedbackCue::Start => self.play_start(ctx, vol),
            FeedbackCue::Click => self.play_click(ctx, vol),
            FeedbackCue::Failure => self.play_failure(ctx, vol),
        }
    }

    fn vibrate(&self, cue: FeedbackCue) {
        if !self.settings.haptics {
            return;
        }
        if let Some(window) = web_sys::window() {
            window.navigator().vibrate_with_duration(cue.haptic_ms());
        }
    }

    /// Oscillator routed through a gain node to the speakers
    fn create_osc(
        &self,
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

    /// Rising two-note chirp
    fn play_start(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();
        for (i, freq) in [440.0, 660.0].into_iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
                return;
            };
            let start = t + i as f64 * 0.08;
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().set_value_at_time(vol * 0.2, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.07)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.08).ok();
        }
    }

    /// Short blip on jump
    fn play_click(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 600.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.05)
            .ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.06).ok();
    }

    /// Falling buzz on crash
    fn play_failure(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.4)
            .ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(55.0, t + 0.4)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.45).ok();
    }
}

impl FeedbackSink for AudioFeedback {
    fn cue(&mut self, cue: FeedbackCue) {
        self.play(cue);
        self.vibrate(cue);
    }
}
