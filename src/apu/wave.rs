use crate::{info, regs};

use super::parts;

/// Plays back 32 4-bit samples stored in wave RAM, shifted down by a
/// 2-bit output-level field instead of carrying its own volume envelope.
#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct WaveChannel {
    pub(crate) on: bool,
    pub(crate) output: u8,

    #[bincode(with_serde)]
    pub(crate) n30: regs::AudioN30,
    #[bincode(with_serde)]
    pub(crate) n31: regs::AudioN31,
    #[bincode(with_serde)]
    pub(crate) n32: regs::AudioN32,
    #[bincode(with_serde)]
    pub(crate) n33: regs::AudioNx3,
    #[bincode(with_serde)]
    pub(crate) n34: regs::AudioNx4,
    pub(crate) wave_ram: [u8; info::SIZE_AUDIO_WAVE_RAM],

    length: parts::LengthCounter,
    timer: parts::FrequencyTimer,
}

impl WaveChannel {
    pub(crate) fn new() -> Self {
        Self {
            timer: parts::FrequencyTimer::new(true),
            ..Default::default()
        }
    }

    pub(crate) fn apu_tick(&mut self) {
        if self.n34.length_timer_enable == 1 {
            self.length.step();
            self.on = self.length.is_active();
        }

        if self.n30.dac_on == 0 {
            self.on = false;
        }
    }

    pub(crate) fn tick(&mut self, dots: u32) {
        if self.n34.trigger == 1 {
            self.trigger();
            return;
        }

        self.output = self.sample_at_current_slot();

        self.timer.advance(dots);
        if self.timer.reload_is_due() {
            self.timer.reload_period(&self.n33, &self.n34);
        }
    }

    fn trigger(&mut self) {
        self.n34.trigger = 0;
        if self.n30.dac_on == 0 {
            return;
        }

        self.on = true;
        self.timer.reload_period(&self.n33, &self.n34);

        if !self.length.is_active() {
            self.length = parts::LengthCounter::new(true, self.n31.length_period);
        }
    }

    #[inline]
    fn sample_at_current_slot(&self) -> u8 {
        let slot = self.timer.slot() as usize;
        let packed = self.wave_ram[slot / 2];
        let nibble = if slot % 2 == 0 {
            packed >> 4
        } else {
            packed & 0xF
        };

        match self.n32.output_level {
            0b00 => 0,
            0b01 => nibble,
            0b10 => nibble >> 1,
            0b11 => nibble >> 2,
            _ => unreachable!(),
        }
    }
}
