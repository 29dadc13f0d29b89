use crate::{counter::Counter, regs};

use super::parts;

/// Square-wave generator; channel 1 additionally carries a period sweep,
/// channel 2 leaves `sweep_enabled` permanently false.
#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct PulseChannel {
    pub(crate) on: bool,
    pub(crate) output: u8,

    #[bincode(with_serde)]
    pub(crate) nx0: regs::AudioNx0,
    #[bincode(with_serde)]
    pub(crate) nx1: regs::AudioNx1,
    #[bincode(with_serde)]
    pub(crate) nx2: regs::AudioNx2,
    #[bincode(with_serde)]
    pub(crate) nx3: regs::AudioNx3,
    #[bincode(with_serde)]
    pub(crate) nx4: regs::AudioNx4,

    has_sweep: bool,
    sweep_clock: Counter,
    sweep_enabled: bool,
    shadow_period: u32,

    envelope: parts::Envelope,
    length: parts::LengthCounter,
    timer: parts::FrequencyTimer,
}

impl PulseChannel {
    pub(crate) fn new(has_sweep: bool) -> Self {
        Self {
            has_sweep,
            timer: parts::FrequencyTimer::new(false),
            ..Default::default()
        }
    }

    pub(crate) fn apu_tick(&mut self) {
        if self.sweep_enabled && self.nx0.pace != 0 {
            self.step_sweep();
        }

        if self.nx4.length_timer_enable == 1 {
            self.length.step();
            self.on = self.length.is_active();
        }

        if !self.dac_enabled() {
            self.on = false;
        }

        self.envelope.step();
    }

    pub(crate) fn tick(&mut self, dots: u32) {
        if self.nx4.trigger == 1 {
            self.trigger();
            return;
        }

        let bit = parts::duty_sample(self.nx1.wave_duty, self.timer.slot());
        self.output = bit * self.envelope.volume();

        self.timer.advance(dots);
        if self.timer.reload_is_due() {
            self.timer.reload_period(&self.nx3, &self.nx4);
        }
    }

    fn trigger(&mut self) {
        self.nx4.trigger = 0;
        if !self.dac_enabled() {
            return;
        }

        self.on = true;
        self.timer.reload_period(&self.nx3, &self.nx4);
        self.envelope = parts::Envelope::new(&self.nx2);

        if !self.length.is_active() {
            self.length = parts::LengthCounter::new(false, self.nx1.length_period);
        }

        if self.has_sweep {
            self.arm_sweep();
        }
    }

    fn arm_sweep(&mut self) {
        self.shadow_period = self.timer.period();
        self.sweep_clock = parts::sweep_counter_for(self.nx0.pace);
        self.sweep_enabled = self.nx0.pace != 0 || self.nx0.shift_step != 0;

        if self.nx0.shift_step == 0 {
            return;
        }

        let (_, overflowed) = parts::compute_swept_period(self.shadow_period, &self.nx0);
        self.on = !overflowed;
    }

    fn step_sweep(&mut self) {
        if self.sweep_clock.tick(1) == 0 {
            return;
        }
        if self.nx0.shift_step == 0 {
            return;
        }

        let (next, overflowed) = parts::compute_swept_period(self.shadow_period, &self.nx0);
        if overflowed {
            self.on = false;
            return;
        }

        self.shadow_period = next;
        parts::write_period_to_regs(&mut self.nx3, &mut self.nx4, next);

        // Recompute without committing, purely to re-check the overflow flag.
        let (_, overflowed) = parts::compute_swept_period(self.shadow_period, &self.nx0);
        self.on = !overflowed;
    }

    fn dac_enabled(&self) -> bool {
        self.nx2.direction != 0 || self.nx2.initial_volume != 0
    }
}
