use crate::constants::*;
use crate::core::synth::{self, ChirpGate};
use web_sys as web;

/// Velocity-modulated synthesizer handle.
///
/// The graph is built once from the start gesture (browsers refuse to produce
/// sound before one) and lives for the rest of the session. Every public
/// method is a silent no-op until then.
pub struct AudioEngine {
    graph: Option<AudioGraph>,
    chirp_gate: ChirpGate,
    muted: bool,
}

struct AudioGraph {
    ctx: web::AudioContext,
    master_gain: web::GainNode,
    engine_filter: web::BiquadFilterNode,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

fn create_drone_osc(
    audio_ctx: &web::AudioContext,
    kind: web::OscillatorType,
    frequency_hz: f32,
    filter: &web::BiquadFilterNode,
) -> Result<web::OscillatorNode, ()> {
    let osc = web::OscillatorNode::new(audio_ctx).map_err(|e| {
        log::error!("drone OscillatorNode error: {:?}", e);
    })?;
    osc.set_type(kind);
    osc.frequency().set_value(frequency_hz);
    _ = osc.connect_with_audio_node(filter);
    _ = osc.start();
    Ok(osc)
}

fn build_graph(audio_ctx: web::AudioContext) -> Result<AudioGraph, ()> {
    let master_gain = create_gain(&audio_ctx, MASTER_GAIN, "master")?;
    _ = master_gain.connect_with_audio_node(&audio_ctx.destination());

    // Drone bus: two slightly detuned oscillators through a low-pass filter.
    // The filter cutoff is the one parameter the frame loop modulates.
    let engine_filter = web::BiquadFilterNode::new(&audio_ctx).map_err(|e| {
        log::error!("BiquadFilterNode error: {:?}", e);
    })?;
    engine_filter.set_type(web::BiquadFilterType::Lowpass);
    engine_filter.frequency().set_value(synth::FILTER_BASE_HZ);

    let drone_gain = create_gain(&audio_ctx, DRONE_GAIN, "drone")?;
    _ = engine_filter.connect_with_audio_node(&drone_gain);
    _ = drone_gain.connect_with_audio_node(&master_gain);

    create_drone_osc(
        &audio_ctx,
        web::OscillatorType::Sawtooth,
        DRONE_SAW_HZ,
        &engine_filter,
    )?;
    create_drone_osc(
        &audio_ctx,
        web::OscillatorType::Sine,
        DRONE_SINE_HZ,
        &engine_filter,
    )?;

    Ok(AudioGraph {
        ctx: audio_ctx,
        master_gain,
        engine_filter,
    })
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine {
    pub fn new() -> Self {
        Self {
            graph: None,
            chirp_gate: ChirpGate::new(),
            muted: false,
        }
    }

    pub fn toggle_muted(&mut self) {
        self.set_muted(!self.muted);
    }

    /// Build the synthesis graph and start the drone. Idempotent; extra calls
    /// keep the first graph.
    pub fn initialize(&mut self) {
        if self.graph.is_some() {
            log::warn!("[audio] initialize called twice; keeping existing graph");
            return;
        }
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("AudioContext error: {:?}", e);
                return;
            }
        };
        _ = audio_ctx.resume();
        if let Ok(graph) = build_graph(audio_ctx) {
            if self.muted {
                graph.master_gain.gain().set_value(0.0);
            }
            log::info!("[audio] drone graph started");
            self.graph = Some(graph);
        }
    }

    /// Push a new cutoff target derived from the smoothed scroll speed. The
    /// audio clock approaches it exponentially; a retarget never cancels a
    /// ramp in flight.
    pub fn modulate(&self, smoothed_velocity: f32) {
        let Some(g) = &self.graph else { return };
        _ = g.engine_filter.frequency().set_target_at_time(
            synth::cutoff_hz(smoothed_velocity),
            g.ctx.current_time(),
            FILTER_RAMP_TAU_SEC,
        );
    }

    /// Fire a short descending chirp. Triggers inside the cooldown window are
    /// dropped so hover sweeps cannot pile up voices.
    pub fn trigger_chirp(&mut self) {
        let Some(g) = &self.graph else { return };
        let t = g.ctx.current_time();
        if !self.chirp_gate.admit(t) {
            return;
        }

        let Ok(osc) = web::OscillatorNode::new(&g.ctx) else {
            return;
        };
        osc.set_type(web::OscillatorType::Sine);
        _ = osc.frequency().set_value_at_time(CHIRP_START_HZ, t);
        _ = osc
            .frequency()
            .exponential_ramp_to_value_at_time(CHIRP_END_HZ, t + CHIRP_DURATION_SEC);

        let Ok(gain) = create_gain(&g.ctx, CHIRP_GAIN, "chirp") else {
            return;
        };
        _ = gain.gain().set_value_at_time(CHIRP_GAIN, t);
        _ = gain
            .gain()
            .exponential_ramp_to_value_at_time(CHIRP_FLOOR, t + CHIRP_DURATION_SEC);

        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&g.master_gain);
        _ = osc.start_with_when(t);
        _ = osc.stop_with_when(t + CHIRP_DURATION_SEC);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(g) = &self.graph {
            g.master_gain
                .gain()
                .set_value(if muted { 0.0 } else { MASTER_GAIN });
        }
    }
}
