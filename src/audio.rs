//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::{CollectibleKind, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Jump,
    Coin,
    Bill,
    Pastry,
    Crash,
    Restart,
}

impl SoundEffect {
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Jumped => SoundEffect::Jump,
            GameEvent::Collected(CollectibleKind::Coin) => SoundEffect::Coin,
            GameEvent::Collected(CollectibleKind::Bill) => SoundEffect::Bill,
            GameEvent::Collected(CollectibleKind::Pastry) => SoundEffect::Pastry,
            GameEvent::Crashed => SoundEffect::Crash,
            GameEvent::Restarted => SoundEffect::Restart,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            log::debug!("Audio muted: {muted}");
        }
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the sound for each event of a frame
    pub fn play_events(&self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::for_event(*event));
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Browsers keep the context suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Jump => self.play_sweep(ctx, vol * 0.3, 220.0, 520.0, 0.15),
            SoundEffect::Coin => {
                self.play_arpeggio(ctx, vol * 0.25, &[988.0, 1319.0], 0.06, OscillatorType::Square)
            }
            SoundEffect::Bill => self.play_arpeggio(
                ctx,
                vol * 0.25,
                &[660.0, 880.0, 1100.0, 1320.0],
                0.06,
                OscillatorType::Triangle,
            ),
            SoundEffect::Pastry => {
                self.play_arpeggio(ctx, vol * 0.3, &[523.0, 659.0, 784.0], 0.08, OscillatorType::Sine)
            }
            SoundEffect::Crash => {
                self.play_sweep(ctx, vol * 0.5, 180.0, 40.0, 0.4);
                self.play_arpeggio(
                    ctx,
                    vol * 0.25,
                    &[400.0, 350.0, 300.0, 200.0],
                    0.2,
                    OscillatorType::Sine,
                );
            }
            SoundEffect::Restart => self.play_sweep(ctx, vol * 0.25, 300.0, 600.0, 0.2),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
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

    /// Single tone gliding from one pitch to another
    fn play_sweep(&self, ctx: &AudioContext, vol: f32, from: f32, to: f32, secs: f64) {
        let Some((osc, gain)) = self.create_osc(ctx, from, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + secs)
            .ok();
        osc.frequency().set_value_at_time(from, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(to, t + secs)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + secs + 0.05).ok();
    }

    /// Short notes one after another
    fn play_arpeggio(
        &self,
        ctx: &AudioContext,
        vol: f32,
        notes: &[f32],
        spacing: f64,
        osc_type: OscillatorType,
    ) {
        for (i, freq) in notes.iter().enumerate() {
            let Some((osc, gain)) = self.create_osc(ctx, *freq, osc_type) else {
                continue;
            };
            let t = ctx.current_time() + i as f64 * spacing;
            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + spacing * 1.5)
                .ok();
            osc.start_with_when(t).ok();
            osc.stop_with_when(t + spacing * 2.0).ok();
        }
    }
}
