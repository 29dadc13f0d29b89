use crate::regs::SerialCtrl;

#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct Serial {
    pub(crate) is_2x: bool,

    // Registers owned by it
    #[bincode(with_serde)]
    pub(crate) sc: SerialCtrl,
    pub(crate) sb: u8,

    // No external link cable exists, so a transfer just self-clocks at a
    // fixed bit period and shifts garbage (0xFF-ish) in from `sb` itself.
    mcycles_into_bit: u16,
    mcycles_per_bit: u16,
    bits_shifted: u16,
    in_progress: bool,
}

impl Serial {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tick(&mut self, mcycles: u16, is_cgb_cart: bool) -> bool {
        if self.sc.tx_enable == 0 {
            return false;
        }

        if !self.in_progress {
            self.mcycles_per_bit = if self.sc.clock_select == 0 {
                1
            } else {
                bit_period_mcycles(self.sc.clock_speed, is_cgb_cart, self.is_2x)
            };
            self.bits_shifted = 0;
            self.mcycles_into_bit = 0;
            self.in_progress = true;
            return false;
        }

        let (elapsed, bits_advanced) =
            advance_cyclic(self.mcycles_per_bit, self.mcycles_into_bit, mcycles);
        self.mcycles_into_bit = elapsed;
        self.bits_shifted += bits_advanced;
        self.sb = self.sb.wrapping_shl(bits_advanced as u32);

        if self.bits_shifted < 8 {
            return false;
        }

        self.in_progress = false;
        self.sc.tx_enable = 0;
        true
    }
}

/// How many M-cycles one shifted bit takes, given the requested clock.
fn bit_period_mcycles(clock_speed: u8, is_cgb_cart: bool, is_2x: bool) -> u16 {
    if !is_cgb_cart {
        128
    } else {
        match (clock_speed == 1, is_2x) {
            (true, true) => 4,
            (true, false) => 8,
            (false, true) => 256,
            (false, false) => 128,
        }
    }
}

/// Advance `pos` by `delta` modulo `period`, returning the new position and
/// how many full periods were crossed.
fn advance_cyclic(period: u16, pos: u16, delta: u16) -> (u16, u16) {
    if delta < period - pos {
        (pos + delta, 0)
    } else {
        let past_first_wrap = delta - (period - pos);
        (past_first_wrap % period, past_first_wrap / period + 1)
    }
}
