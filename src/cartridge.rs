mod mbc;
mod rtc;

use bincode::{Decode, Encode};

use crate::{
    error::EmulatorError,
    info::*,
    macros::match_range,
};

use mbc::{Mbc, MbcKind};

/// Owns the cartridge's ROM bytes, external RAM, and MBC register state.
/// ROM bytes are read-only after [`Cartridge::new`] returns.
#[derive(Encode, Decode)]
pub(crate) struct Cartridge {
    pub(crate) is_cgb: bool,
    pub(crate) has_battery: bool,
    mbc: Mbc,

    rom: Box<[u8]>,
    /// External RAM banks, lazily grown on first access to a given bank.
    ram: Vec<u8>,
}

impl Cartridge {
    pub(crate) fn new(rom: &[u8]) -> Result<Self, EmulatorError> {
        if rom.len() <= CART_TYPE {
            return Err(EmulatorError::RomTooShort {
                path: None,
                actual: rom.len(),
            });
        }

        let is_cgb = matches!(rom[CART_CGB_FLAG], CART_CGB_TOO | CART_CGB_ONLY);
        let type_byte = rom[CART_TYPE];
        let has_battery = matches!(
            type_byte,
            0x03 | 0x06 | 0x09 | 0x0D | 0x0F | 0x10 | 0x13 | 0x1B | 0x1E | 0x22 | 0xFF
        );

        let mbc = Mbc::new(type_byte)?;

        let declared_banks = rom_size_to_banks(rom[CART_ROM_SIZE])
            .ok_or(EmulatorError::UnknownRomSize { code: rom[CART_ROM_SIZE] })?;
        let declared_len = declared_banks * SIZE_ROM_BANK;

        // Invariant: declared ROM size must not exceed the file; truncate
        // to whatever bytes actually exist otherwise.
        let rom = if declared_len <= rom.len() {
            rom[..declared_len].to_vec()
        } else {
            log::warn!(
                "cartridge: declared rom size {declared_len} exceeds file length {}, truncating",
                rom.len()
            );
            rom.to_vec()
        }
        .into_boxed_slice();

        let ram_banks = ram_size_to_banks(rom[CART_RAM_SIZE])
            .ok_or(EmulatorError::UnknownRamSize { code: rom[CART_RAM_SIZE] })?;

        log::debug!(
            "cartridge: mbc={} cgb={is_cgb} battery={has_battery} rom_banks={declared_banks} ram_banks={ram_banks}",
            mbc.kind.name()
        );

        Ok(Self {
            is_cgb,
            has_battery,
            mbc,
            rom,
            ram: vec![0; ram_banks.max(1) * SIZE_EXT_RAM],
        })
    }

    pub(crate) fn tick(&mut self, dots: u32) {
        self.mbc.tick(dots);
    }

    pub(crate) fn read(&self, addr: usize) -> u8 {
        let safe_read = |a: usize| self.rom.get(a).copied().unwrap_or(0xFF);

        match_range! { v@addr {
            ADDR_ROM0 => { safe_read(self.mbc.rom0_addr(v)) }
            ADDR_ROM1 => { safe_read(self.mbc.rom1_addr(v)) }
            ADDR_EXT_RAM => { self.read_ext_ram(v) }
            _ => { unreachable!("cartridge read outside its mapped ranges: {addr:#06x}") }
        }}
    }

    pub(crate) fn write(&mut self, addr: usize, val: u8) {
        match_range! { v@addr {
            ADDR_ROM0 => { self.mbc.write(addr, val) }
            ADDR_ROM1 => { self.mbc.write(addr, val) }
            ADDR_EXT_RAM => { self.write_ext_ram(v, val) }
            _ => { unreachable!("cartridge write outside its mapped ranges: {addr:#06x}") }
        }}
    }

    fn read_ext_ram(&self, offset: usize) -> u8 {
        if let Some(reg) = self.mbc.kind.get_mbc3_rtc_reg_if_set() {
            return self.mbc.rtc.read(reg);
        }
        if !self.mbc.ram_enabled {
            return 0xFF;
        }
        self.ram
            .get(self.mbc.ram_addr(offset))
            .copied()
            .unwrap_or(0xFF)
    }

    fn write_ext_ram(&mut self, offset: usize, val: u8) {
        if let Some(reg) = self.mbc.kind.get_mbc3_rtc_reg_if_set() {
            self.mbc.rtc.write(reg, val);
            return;
        }
        if !self.mbc.ram_enabled {
            return;
        }
        let addr = self.mbc.ram_addr(offset);
        if let Some(slot) = self.ram.get_mut(addr) {
            *slot = val;
        }
    }

    /// Serialize battery-backed RAM (and the RTC, if present) for the
    /// `.gem` save-file contract.
    pub(crate) fn save(&mut self) -> Vec<u8> {
        let is_mbc3 = matches!(self.mbc.kind, MbcKind::Mbc3 { .. });
        let bank_count = (self.ram.len() / SIZE_EXT_RAM) as u8;

        let mut out = Vec::with_capacity(1 + 13 + 1 + self.ram.len());
        out.push(is_mbc3 as u8);
        if is_mbc3 {
            out.extend_from_slice(&self.mbc.rtc.export());
        }
        out.push(bank_count);
        out.extend_from_slice(&self.ram);
        out
    }

    /// Load a previously-[`Cartridge::save`]d buffer, validating that the
    /// RTC presence and bank count match this cartridge's header.
    /// Path-carrying `EmulatorError`s are the caller's responsibility
    /// (see [`crate::Machine::load_save_file`]); this returns a bare
    /// `bool` indicating "corrupted/truncated" vs "header mismatch" via
    /// `Err(true)`/`Err(false)` respectively.
    pub(crate) fn load_save(&mut self, bytes: &[u8]) -> Result<(), bool> {
        let expect_rtc = matches!(self.mbc.kind, MbcKind::Mbc3 { .. });
        let mut pos = 0;
        let rtc_present = *bytes.get(pos).ok_or(true)? != 0;
        pos += 1;

        if rtc_present != expect_rtc {
            return Err(false);
        }

        if rtc_present {
            let chunk: [u8; 13] = bytes
                .get(pos..pos + 13)
                .and_then(|s| s.try_into().ok())
                .ok_or(true)?;
            self.mbc.rtc = rtc::Mbc3Rtc::import(chunk);
            pos += 13;
        }

        let bank_count = *bytes.get(pos).ok_or(true)? as usize;
        pos += 1;

        let expected_banks = self.ram.len() / SIZE_EXT_RAM;
        if bank_count != expected_banks {
            return Err(false);
        }

        let ram_bytes = bytes.get(pos..pos + bank_count * SIZE_EXT_RAM).ok_or(true)?;
        self.ram.copy_from_slice(ram_bytes);
        Ok(())
    }
}

fn rom_size_to_banks(code: u8) -> Option<usize> {
    // 0x00..=0x08: 32KiB << code, i.e. 2 << code banks of 16KiB.
    (code <= 0x08).then(|| 2usize << code)
}

fn ram_size_to_banks(code: u8) -> Option<usize> {
    match code {
        0x00 => Some(0),
        0x02 => Some(1), // 1 bank of 8KiB
        0x03 => Some(4), // 4 banks of 8KiB
        0x04 => Some(16),
        0x05 => Some(8),
        _ => None,
    }
}
