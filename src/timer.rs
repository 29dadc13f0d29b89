use crate::regs::TimerCtrl;

#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct Timer {
    pub(crate) is_2x: bool,

    // Registers owned by it.
    #[bincode(with_serde)]
    pub(crate) tac: TimerCtrl,
    pub(crate) tma: u8,
    pub(crate) tima: u8,

    /// Internal 14-bit divider chain, incremented every M-cycle; TIMA ticks
    /// off whichever bit `tac.clock_select` picks out of this.
    divider_chain: u16,
    apu_falling_edge: bool,
    div_write_pending: bool,
    tima_reload_pending: bool,
}

const DIVIDER_CHAIN_MASK: u16 = !(!0 << 14);

impl Timer {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    /// Advance the divider chain by `mcycles` M-cycles, incrementing TIMA
    /// on every bit-fall the TAC clock-select names. Returns whether a
    /// TIMER interrupt was requested along the way.
    pub(crate) fn tick(&mut self, mcycles: u16) -> bool {
        // A DIV write takes effect one M-cycle later than requested.
        let mcycles = if self.div_write_pending {
            self.div_write_pending = false;
            mcycles - 1
        } else {
            mcycles
        };

        let mut timer_intr = false;
        for _ in 0..mcycles {
            let next = (self.divider_chain + 1) & DIVIDER_CHAIN_MASK;
            timer_intr |= self.advance_one_mcycle(self.divider_chain, next);
            self.divider_chain = next;
        }

        timer_intr
    }

    pub(crate) fn set_div(&mut self, _val: u8) {
        self.divider_chain = 0;
        self.div_write_pending = true;
    }

    pub(crate) fn get_div(&self) -> u8 {
        (self.divider_chain >> 6) as u8
    }

    pub(crate) fn is_apu_event(&self) -> bool {
        self.apu_falling_edge
    }

    fn advance_one_mcycle(&mut self, before: u16, after: u16) -> bool {
        let apu_bit = if self.is_2x { 11 } else { 10 };
        self.apu_falling_edge = bit_fell(before, after, apu_bit);

        if self.tac.enable == 0 {
            return false;
        }

        // TIMA's overflow->TMA reload and its interrupt are delayed by one
        // M-cycle, during which TIMA reads back as 0.
        let pending_intr = if self.tima_reload_pending {
            self.tima = self.tma;
            self.tima_reload_pending = false;
            true
        } else {
            false
        };

        if !bit_fell(before, after, tima_clock_bit(self.tac.clock_select)) {
            return pending_intr;
        }

        if self.tima == 0xFF {
            self.tima_reload_pending = true;
            self.tima = 0;
        } else {
            self.tima += 1;
        }

        pending_intr
    }
}

/// Which divider-chain bit must fall for TAC's selected rate to tick TIMA.
#[inline]
fn tima_clock_bit(clock_select: u8) -> u32 {
    match clock_select {
        1 => 1,
        2 => 3,
        3 => 5,
        0 => 7,
        _ => unreachable!(),
    }
}

#[inline]
fn bit_fell(before: u16, after: u16, bit: u32) -> bool {
    (before >> bit) & 1 == 1 && (after >> bit) & 1 == 0
}
