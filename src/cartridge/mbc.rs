use bincode::{Decode, Encode};

use super::rtc::Mbc3Rtc;
use crate::{error::EmulatorError, info};

/// Bank-switching state for one of the MBC flavours this core implements.
/// Cartridge types this core does not implement (MBC2, MBC4, MBC6, MBC7,
/// MMM01, HuC1/3, and MBC5's rumble variants) are rejected in
/// [`Mbc::new`] and never reach this enum.
#[derive(Debug, Encode, Decode, Clone, Copy)]
pub(crate) enum MbcKind {
    None,
    Mbc1 {
        rom_select_lo: usize,
        rom_select_hi: usize,
        large_ram_mode: bool,
    },
    Mbc3 {
        rom_select: usize,
        ram_rtc_select: usize,
    },
    Mbc5 {
        rom_select_lo: usize,
        rom_select_hi: usize,
        ram_select: usize,
    },
}

impl MbcKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            MbcKind::None => "None",
            MbcKind::Mbc1 { .. } => "MBC1",
            MbcKind::Mbc3 { .. } => "MBC3",
            MbcKind::Mbc5 { .. } => "MBC5",
        }
    }

    /// If the active MBC3 `ram_rtc_select` currently names one of the five
    /// RTC registers (`$08`-`$0C`) rather than a RAM bank, return it.
    pub(crate) fn get_mbc3_rtc_reg_if_set(&self) -> Option<usize> {
        match self {
            Self::Mbc3 {
                ram_rtc_select: reg @ 0x8..=0xC,
                ..
            } => Some(*reg),
            _ => None,
        }
    }
}

/// Decoded (bank, low ROM bank, high ROM bank) selection for one MBC write.
struct BankSelection {
    ram_bank: usize,
    rom0_bank: usize,
    rom1_bank: usize,
}

#[derive(Encode, Decode)]
pub(crate) struct Mbc {
    pub(crate) kind: MbcKind,
    pub(crate) ram_enabled: bool,
    pub(crate) rtc: Mbc3Rtc,

    active_ram_bank: usize,
    active_rom0_bank: usize,
    active_rom1_bank: usize,
}

impl Mbc {
    pub(crate) fn new(mbc_type_byte: u8) -> Result<Self, EmulatorError> {
        let kind = match mbc_type_byte {
            0x00 | 0x08 | 0x09 => MbcKind::None,
            0x01..=0x03 => MbcKind::Mbc1 {
                rom_select_lo: 1,
                rom_select_hi: 0,
                large_ram_mode: false,
            },
            0x0F..=0x13 => MbcKind::Mbc3 {
                rom_select: 1,
                ram_rtc_select: 0,
            },
            0x19 | 0x1A | 0x1B => MbcKind::Mbc5 {
                rom_select_lo: 1,
                rom_select_hi: 0,
                ram_select: 0,
            },
            // MBC2, MMM01, MBC5 rumble variants, MBC6/7, HuC1/3: not implemented.
            _ => return Err(EmulatorError::UnsupportedCartridge { code: mbc_type_byte }),
        };

        Ok(Self {
            kind,
            ram_enabled: false,
            rtc: Mbc3Rtc::new(),
            active_ram_bank: 0,
            active_rom0_bank: 0,
            active_rom1_bank: 1,
        })
    }

    /// Route a CPU write in `$0000..=$7FFF` to the bank-control registers
    /// for whichever MBC flavour this cartridge uses, and cache the
    /// resulting bank selection for [`Self::ram_addr`]/[`Self::rom0_addr`]/
    /// [`Self::rom1_addr`] to consult.
    pub(crate) fn write(&mut self, addr: usize, v: u8) {
        let ram_enable_requested = v as usize & mask(4) == 0xA;

        let selection = match &mut self.kind {
            MbcKind::None => BankSelection {
                ram_bank: 0,
                rom0_bank: 0,
                rom1_bank: 0,
            },
            MbcKind::Mbc1 { .. } => {
                if addr <= 0x1FFF {
                    self.ram_enabled = ram_enable_requested;
                }
                Self::step_mbc1(&mut self.kind, addr, v)
            }
            MbcKind::Mbc3 { .. } => {
                if addr <= 0x1FFF {
                    self.ram_enabled = ram_enable_requested;
                }
                self.step_mbc3(addr, v)
            }
            MbcKind::Mbc5 { .. } => {
                if addr <= 0x1FFF {
                    self.ram_enabled = ram_enable_requested;
                }
                Self::step_mbc5(&mut self.kind, addr, v)
            }
        };

        self.active_ram_bank = selection.ram_bank;
        self.active_rom0_bank = selection.rom0_bank;
        self.active_rom1_bank = selection.rom1_bank;
    }

    /// MBC1: a 5-bit bank register at `$2000-$3FFF`, a 2-bit register at
    /// `$4000-$5FFF` shared between "RAM bank" and "ROM bank bits 5-6"
    /// depending on the mode latch at `$6000-$7FFF`.
    fn step_mbc1(kind: &mut MbcKind, addr: usize, v: u8) -> BankSelection {
        let MbcKind::Mbc1 {
            rom_select_lo,
            rom_select_hi,
            large_ram_mode,
        } = kind
        else {
            unreachable!()
        };

        match addr {
            0x2000..=0x3FFF => *rom_select_lo = fix_mbc1_rom_bank(v as usize & mask(5)),
            0x4000..=0x5FFF => *rom_select_hi = v as usize & mask(2),
            0x6000..=0x7FFF => *large_ram_mode = v & 1 == 1,
            _ => (),
        }

        let bank0 = if *large_ram_mode { *rom_select_hi } else { 0 };
        BankSelection {
            ram_bank: bank0,
            rom0_bank: bank0 << 5,
            rom1_bank: *rom_select_lo | *rom_select_hi << 5,
        }
    }

    /// MBC3: a 7-bit ROM register, a 4-bit RAM/RTC-register select, and a
    /// latch gate that copies the live clock into the RTC's readable
    /// registers on a `0` then `1` write.
    fn step_mbc3(&mut self, addr: usize, v: u8) -> BankSelection {
        let MbcKind::Mbc3 {
            rom_select,
            ram_rtc_select,
        } = &mut self.kind
        else {
            unreachable!()
        };

        match addr {
            0x2000..=0x3FFF => *rom_select = fix_zero_bank(v as usize & mask(7)),
            0x4000..=0x5FFF => *ram_rtc_select = v as usize & mask(4),
            0x6000..=0x7FFF => match v {
                0 => self.rtc.set_latching(false),
                1 => self.rtc.set_latching(true),
                _ => (),
            },
            _ => (),
        }

        let MbcKind::Mbc3 {
            rom_select,
            ram_rtc_select,
        } = &self.kind
        else {
            unreachable!()
        };
        BankSelection {
            ram_bank: *ram_rtc_select,
            rom0_bank: 0,
            rom1_bank: *rom_select,
        }
    }

    /// MBC5: independent 8-bit/1-bit ROM bank halves and a 4-bit RAM bank,
    /// each its own register; unlike MBC1/MBC3, bank 0 is selectable.
    fn step_mbc5(kind: &mut MbcKind, addr: usize, v: u8) -> BankSelection {
        let MbcKind::Mbc5 {
            rom_select_lo,
            rom_select_hi,
            ram_select,
        } = kind
        else {
            unreachable!()
        };

        match addr {
            0x2000..=0x2FFF => *rom_select_lo = v as usize,
            0x3000..=0x3FFF => *rom_select_hi = v as usize & 1,
            0x4000..=0x5FFF => *ram_select = v as usize & mask(4),
            _ => (),
        }

        BankSelection {
            ram_bank: *ram_select,
            rom0_bank: 0,
            rom1_bank: *rom_select_lo | *rom_select_hi << 8,
        }
    }

    pub(crate) fn tick(&mut self, dots: u32) {
        if matches!(self.kind, MbcKind::Mbc3 { .. }) {
            self.rtc.tick(dots);
        }
    }

    #[inline]
    pub(crate) fn ram_addr(&self, addr: usize) -> usize {
        (addr & (info::SIZE_EXT_RAM - 1)) | (self.active_ram_bank * info::SIZE_EXT_RAM)
    }

    #[inline]
    pub(crate) fn rom0_addr(&self, addr: usize) -> usize {
        (addr & (info::SIZE_ROM_BANK - 1)) | (self.active_rom0_bank * info::SIZE_ROM_BANK)
    }

    #[inline]
    pub(crate) fn rom1_addr(&self, addr: usize) -> usize {
        (addr & (info::SIZE_ROM_BANK - 1)) | (self.active_rom1_bank * info::SIZE_ROM_BANK)
    }
}

/// MBC1-specific: in addition to bank 0 bumping to 1, the codes 0x20,
/// 0x40 and 0x60 are unreachable (the upper-bits register would need to
/// select one of those exact banks while the low register reads 0), so
/// hardware bumps them to the next bank up.
fn fix_mbc1_rom_bank(b: usize) -> usize {
    match fix_zero_bank(b) {
        0x20 | 0x40 | 0x60 => b + 1,
        b => b,
    }
}

fn fix_zero_bank(b: usize) -> usize {
    if b == 0 {
        1
    } else {
        b
    }
}

#[inline(always)]
const fn mask(bits: u32) -> usize {
    if bits == usize::BITS {
        !0
    } else {
        !(!0 << bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbc1_forbidden_bank_codes_bump_to_next() {
        let mut mbc = Mbc::new(0x01).unwrap();
        for code in [0x20usize, 0x40, 0x60] {
            mbc.write(0x2000, code as u8);
            assert_eq!(mbc.rom1_addr(0x4000) / info::SIZE_ROM_BANK, code + 1);
        }
    }

    #[test]
    fn mbc1_bank_zero_bumps_to_one() {
        let mut mbc = Mbc::new(0x01).unwrap();
        mbc.write(0x2000, 0x00);
        assert_eq!(mbc.rom1_addr(0x4000) / info::SIZE_ROM_BANK, 1);
    }

    #[test]
    fn mbc5_bank_zero_is_selectable() {
        let mut mbc = Mbc::new(0x19).unwrap();
        mbc.write(0x2000, 0x00);
        assert_eq!(mbc.rom1_addr(0x4000) / info::SIZE_ROM_BANK, 0);
    }

    #[test]
    fn mbc2_and_rumble_variants_are_unsupported() {
        assert!(Mbc::new(0x05).is_err());
        assert!(Mbc::new(0x06).is_err());
        assert!(Mbc::new(0x1C).is_err());
        assert!(Mbc::new(0x1E).is_err());
    }
}
