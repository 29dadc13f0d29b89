//! Audio Processing Unit: four channel generators feeding a stereo mixer.
//!
//! The mixer and high-pass stage are organized around the two hardware
//! constants that actually drive the math: a DAC output has 16 representable
//! codes (0..=15) and a master-volume (panning level) register has 8
//! representable gain steps (0..=7, stored as the raw 3-bit field). Both are
//! named below instead of appearing as bare literals in the arithmetic.

mod noise;
mod parts;
mod pulse;
mod wave;

use noise::NoiseChannel;
use pulse::PulseChannel;
use wave::WaveChannel;

use crate::{counter::Counter, regs};

/// Digital amplitudes from a channel generator span 0..=15.
const DAC_CODE_RANGE: f64 = 15.0;
/// NR50's per-side volume field spans 0..=7, i.e. 8 distinct gain steps.
const PANNING_GAIN_STEPS: f64 = 8.0;
/// Four emitters are summed before normalizing back into [-1, 1].
const EMITTER_COUNT: f64 = 4.0;

/// Constant from the high-pass filter used to strip DC offset out of the
/// mixed signal, derived from the RC time constant documented for DMG/CGB
/// audio hardware (see gbdev pandocs, "Audio details").
const HPF_DECAY_PER_DOT: f64 = 0.999958;

/// Per-side DC-blocking filter: tracks a decaying "charge" and subtracts it
/// from each incoming sample so silence settles back to zero instead of
/// drifting.
#[derive(Default, bincode::Encode, bincode::Decode)]
struct DcBlocker {
    charge: f64,
    decay: f64,
}

impl DcBlocker {
    fn retune(&mut self, samples_per_dot_decay: f64) {
        self.decay = samples_per_dot_decay;
    }

    fn filter(&mut self, sample: f64) -> f64 {
        let out = sample - self.charge;
        self.charge = sample - out * self.decay;
        out
    }
}

/// Four channel generators, their routing/volume registers, and the stereo
/// resampling-and-filtering stage that turns their output into a float
/// sample stream.
#[derive(bincode::Encode, bincode::Decode)]
pub(crate) struct Apu {
    #[bincode(with_serde)]
    pub(crate) nr52: regs::AudioNr52,
    #[bincode(with_serde)]
    pub(crate) nr51: regs::AudioNr51,
    #[bincode(with_serde)]
    pub(crate) nr50: regs::AudioNr50,

    pub(crate) ch1: PulseChannel,
    pub(crate) ch2: PulseChannel,
    pub(crate) ch3: WaveChannel,
    pub(crate) ch4: NoiseChannel,

    /// Interleaved L,R float samples accumulated since the last drain.
    sample_buffer: Vec<f32>,
    resample_clock: Counter,

    left: DcBlocker,
    right: DcBlocker,
}

impl Apu {
    pub(crate) fn new() -> Self {
        Self {
            ch1: PulseChannel::new(true),
            ch2: PulseChannel::new(false),
            ch3: WaveChannel::new(),
            ch4: NoiseChannel::new(),

            nr52: Default::default(),
            nr51: Default::default(),
            nr50: Default::default(),

            sample_buffer: Vec::new(),
            resample_clock: Counter::new(0), // resampling disabled until configured

            left: DcBlocker::default(),
            right: DcBlocker::default(),
        }
    }

    /// Advance every channel generator by `dots` T-cycles, plus one 512 Hz
    /// frame-sequencer step per `seq_steps` (0 or 1 — DIV-APU only ever
    /// delivers a single step per call even across a speed switch).
    pub(crate) fn tick(&mut self, dots: u32, seq_steps: u8) {
        assert!(seq_steps <= 1, "frame sequencer cannot skip a step");

        for _ in 0..seq_steps {
            self.ch1.apu_tick();
            self.ch2.apu_tick();
            self.ch3.apu_tick();
            self.ch4.apu_tick();
        }

        self.ch1.tick(dots);
        self.ch2.tick(dots);
        self.ch3.tick(dots);
        self.ch4.tick(dots);

        self.nr52.ch1_on = self.ch1.on as u8;
        self.nr52.ch2_on = self.ch2.on as u8;
        self.nr52.ch3_on = self.ch3.on as u8;
        self.nr52.ch4_on = self.ch4.on as u8;

        let due = self.resample_clock.tick(dots);
        for _ in 0..due {
            self.mix_one_sample();
        }
    }

    /// Reconfigure the resampling period (in T-cycles per output sample)
    /// and hand back everything accumulated under the previous period; a
    /// period of 0 pauses resampling entirely.
    pub(crate) fn start_new_sampling(&mut self, dots_per_sample: u32) -> Vec<f32> {
        self.resample_clock = Counter::new(dots_per_sample);

        let decay = HPF_DECAY_PER_DOT.powf(dots_per_sample as f64);
        self.left.retune(decay);
        self.right.retune(decay);

        std::mem::take(&mut self.sample_buffer)
    }

    fn mix_one_sample(&mut self) {
        let emitters = [
            (self.ch1.on, self.ch1.output),
            (self.ch2.on, self.ch2.output),
            (self.ch3.on, self.ch3.output),
            (self.ch4.on, self.ch4.output),
        ];

        let mut left = 0.0;
        let mut right = 0.0;
        for (channel, (enabled, digital)) in emitters.into_iter().enumerate() {
            let analog = dac_to_analog(enabled, digital);
            if self.nr51.routed(channel, true) {
                left += analog;
            }
            if self.nr51.routed(channel, false) {
                right += analog;
            }
        }

        left = apply_panning_level(self.nr50.level(true), left);
        right = apply_panning_level(self.nr50.level(false), right);

        left = self.left.filter(left);
        right = self.right.filter(right);

        self.sample_buffer.push((left / EMITTER_COUNT) as f32);
        self.sample_buffer.push((right / EMITTER_COUNT) as f32);
    }
}

/// Map a channel's 0..=15 digital gate output onto an analog amplitude in
/// [-1, 1]; a disabled DAC outputs a constant zero instead of floating.
#[inline(always)]
fn dac_to_analog(dac_enabled: bool, digital: u8) -> f64 {
    if !dac_enabled {
        return 0.0;
    }
    2.0 * digital as f64 / DAC_CODE_RANGE - 1.0
}

/// Apply the NR50 per-side volume field: register value 0 still passes
/// sound through at the lowest of 8 gain steps, it does not mute.
#[inline(always)]
fn apply_panning_level(level_field: u8, routed: f64) -> f64 {
    routed * (level_field as f64 + 1.0) / PANNING_GAIN_STEPS
}
