use std::cell::Cell;

use crate::{
    apu::Apu,
    cartridge::Cartridge,
    info::*,
    macros::{in_ranges, match_range},
    ppu::Ppu,
    regs::{ActionButtons, CgbPaletteIndex, DPad, Hdma5, IntrBits, JoyPad, Key1, Rp},
    serial::Serial,
    timer::Timer,
};

/// DMA source high-byte only covers `$00`-`$DF`; values above that wrap.
const DMA_SRC_PAGE_COUNT: usize = 0xDF + 1;

/// A single breakpoint entry matching an address, and optionally a value
/// (or a mask over it); latches `hit` when a matching access occurs. The
/// tick-loop owner is responsible for clearing `hit` and acting on it.
/// `hit` uses interior mutability so it can be set from the hot, `&self`
/// CPU read path without forcing `Mmu::read` to take `&mut self`.
#[derive(Debug, Clone)]
pub struct Breakpoint {
    pub address: u16,
    pub value: Option<u8>,
    pub value_is_mask: bool,
    pub hit: Cell<bool>,
}

impl Breakpoint {
    pub fn new(address: u16) -> Self {
        Self {
            address,
            value: None,
            value_is_mask: false,
            hit: Cell::new(false),
        }
    }

    fn matches(&self, addr: u16, val: u8) -> bool {
        if self.address != addr {
            return false;
        }
        match (self.value, self.value_is_mask) {
            (None, _) => true,
            (Some(v), false) => v == val,
            (Some(m), true) => val & m == m,
        }
    }
}

/// Address-space dispatcher: owns the cartridge, PPU, APU, timer, serial
/// port, and whichever registers no single component already owns.
pub(crate) struct Mmu {
    /// True while running in CGB double-speed mode. Duplicated onto every
    /// component that cares, rather than shared via `Rc`, since it only
    /// ever flips on a STOP-triggered speed switch.
    pub(crate) is_2x: bool,

    pub(crate) ppu: Ppu,
    pub(crate) apu: Apu,
    pub(crate) timer: Timer,
    pub(crate) serial: Serial,
    pub(crate) cart: Cartridge,

    pub(crate) key1: Key1,
    pub(crate) iflag: IntrBits,
    pub(crate) ienable: IntrBits,
    pub(crate) joypad: JoyPad,
    pub(crate) bgpi: CgbPaletteIndex,
    pub(crate) obpi: CgbPaletteIndex,
    pub(crate) opri: u8,
    pub(crate) dma: u8,
    pub(crate) rp: Rp,
    pub(crate) wram_idx: usize,
    pub(crate) vram_idx: usize,

    // VRAM DMA (HDMA), CGB-only.
    hdma_src: u16,
    hdma_dst: u16,
    hdma5: Hdma5,
    hdma_active: bool,
    hdma_remaining_blocks: u8,
    prev_ppu_mode: u8,

    // Debug-only breakpoint state; reset on load rather than persisted.
    pub breakpoints_enabled: bool,
    pub read_breakpoints: Vec<Breakpoint>,
    pub write_breakpoints: Vec<Breakpoint>,

    /// Address touched by the most recent `write()`, consumed by the
    /// disassembler to invalidate its decode cache. Debug-only.
    last_write_addr: Cell<Option<u16>>,

    // WRAM bank 0 is fixed; the second window switches across banks 1-7.
    wram: [[u8; SIZE_WRAM_BANK]; WRAM_BANKS],
    hram: [u8; SIZE_HRAM],

    dpad: DPad,
    buttons: ActionButtons,
}

// Breakpoint state and `last_write_addr` are debug-only and intentionally
// not persisted (bincode_derive 2.0.1 has no `#[bincode(skip)]` support, so
// this mirrors what the derive would generate for the other fields).
impl bincode::Encode for Mmu {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.is_2x, encoder)?;
        bincode::Encode::encode(&self.ppu, encoder)?;
        bincode::Encode::encode(&self.apu, encoder)?;
        bincode::Encode::encode(&self.timer, encoder)?;
        bincode::Encode::encode(&self.serial, encoder)?;
        bincode::Encode::encode(&self.cart, encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.key1), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.iflag), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.ienable), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.joypad), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.bgpi), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.obpi), encoder)?;
        bincode::Encode::encode(&self.opri, encoder)?;
        bincode::Encode::encode(&self.dma, encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.rp), encoder)?;
        bincode::Encode::encode(&self.wram_idx, encoder)?;
        bincode::Encode::encode(&self.vram_idx, encoder)?;
        bincode::Encode::encode(&self.hdma_src, encoder)?;
        bincode::Encode::encode(&self.hdma_dst, encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.hdma5), encoder)?;
        bincode::Encode::encode(&self.hdma_active, encoder)?;
        bincode::Encode::encode(&self.hdma_remaining_blocks, encoder)?;
        bincode::Encode::encode(&self.prev_ppu_mode, encoder)?;
        bincode::Encode::encode(&self.wram, encoder)?;
        bincode::Encode::encode(&self.hram, encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.dpad), encoder)?;
        bincode::Encode::encode(&bincode::serde::Compat(&self.buttons), encoder)?;
        Ok(())
    }
}

impl<Context> bincode::Decode<Context> for Mmu {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Ok(Self {
            is_2x: bincode::Decode::decode(decoder)?,
            ppu: bincode::Decode::decode(decoder)?,
            apu: bincode::Decode::decode(decoder)?,
            timer: bincode::Decode::decode(decoder)?,
            serial: bincode::Decode::decode(decoder)?,
            cart: bincode::Decode::decode(decoder)?,
            key1: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            iflag: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            ienable: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            joypad: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            bgpi: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            obpi: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            opri: bincode::Decode::decode(decoder)?,
            dma: bincode::Decode::decode(decoder)?,
            rp: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            wram_idx: bincode::Decode::decode(decoder)?,
            vram_idx: bincode::Decode::decode(decoder)?,
            hdma_src: bincode::Decode::decode(decoder)?,
            hdma_dst: bincode::Decode::decode(decoder)?,
            hdma5: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            hdma_active: bincode::Decode::decode(decoder)?,
            hdma_remaining_blocks: bincode::Decode::decode(decoder)?,
            prev_ppu_mode: bincode::Decode::decode(decoder)?,
            breakpoints_enabled: Default::default(),
            read_breakpoints: Default::default(),
            write_breakpoints: Default::default(),
            last_write_addr: Default::default(),
            wram: bincode::Decode::decode(decoder)?,
            hram: bincode::Decode::decode(decoder)?,
            dpad: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
            buttons: (<bincode::serde::Compat<_> as bincode::Decode<Context>>::decode(decoder)?).0,
        })
    }
}

impl<'de, Context> bincode::BorrowDecode<'de, Context> for Mmu {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        bincode::Decode::decode(decoder)
    }
}

impl Mmu {
    pub(crate) fn new(cartd: Cartridge, breakpoints_enabled: bool) -> Self {
        let mut ppu = Ppu::new();
        ppu.fetcher.is_cgb = cartd.is_cgb;

        Self {
            is_2x: false,
            cart: cartd,

            ppu,
            apu: Apu::new(),
            timer: Timer::new(),
            serial: Serial::new(),

            wram: [[0; SIZE_WRAM_BANK]; WRAM_BANKS],
            hram: [0; SIZE_HRAM],
            ienable: Default::default(),
            iflag: Default::default(),
            key1: Default::default(),
            joypad: Default::default(),
            bgpi: Default::default(),
            obpi: Default::default(),
            wram_idx: 1,
            vram_idx: 0,
            opri: 0,
            dma: 0,
            rp: Rp::new(0b10),

            hdma_src: 0,
            hdma_dst: 0,
            hdma5: Default::default(),
            hdma_active: false,
            hdma_remaining_blocks: 0,
            prev_ppu_mode: MODE_SCAN,

            breakpoints_enabled,
            read_breakpoints: Vec::new(),
            write_breakpoints: Vec::new(),
            last_write_addr: Cell::new(None),

            dpad: Default::default(),
            buttons: Default::default(),
        }
    }

    pub(crate) fn tick(&mut self, mcycles: u32) {
        // A double-speed CPU still drives PPU/APU/cartridge at normal dot rate.
        let dots = if self.is_2x { mcycles * 2 } else { mcycles * 4 };

        let raised = self.ppu.tick(dots as u16);
        self.add_interrupt(raised);
        self.advance_hdma_if_entering_hblank();

        if self.timer.tick(mcycles as u16) {
            self.iflag.timer = 1;
        }
        if self.serial.tick(mcycles as u16, self.cart.is_cgb) {
            self.iflag.serial = 1;
        }

        self.cart.tick(dots as u32);
        self.apu.tick(dots as u32, self.timer.is_apu_event() as u8);
    }

    /// An armed H-blank HDMA transfer copies one chunk each time the PPU
    /// freshly *enters* HBlank, not on every tick spent inside it.
    fn advance_hdma_if_entering_hblank(&mut self) {
        let mode = self.ppu.stat.ppu_mode;
        let just_entered = mode == MODE_HBLANK && self.prev_ppu_mode != MODE_HBLANK;

        if self.hdma_active && just_entered {
            self.run_hdma_hblank_chunk();
        }
        self.prev_ppu_mode = mode;
    }

    /// Reads one byte as the CPU would; checks the read breakpoint list
    /// first when breakpoint evaluation is enabled.
    pub(crate) fn read(&self, addr: u16) -> u8 {
        let val = self.load_byte(addr);
        if self.breakpoints_enabled {
            for bp in self.read_breakpoints.iter() {
                if bp.matches(addr, val) {
                    bp.hit.set(true);
                }
            }
        }
        val
    }

    fn load_byte(&self, addr: u16) -> u8 {
        let addr = addr as usize;

        if is_cart_addr(addr) {
            return self.cart.read(addr);
        }

        match_range! { a@addr {
            ADDR_AUDIO_WAVE_RAM => { self.apu.ch3.wave_ram[a] }

            ADDR_VRAM => { self.ppu.fetcher.vram[self.vram_idx][a] }
            ADDR_WRAM0 => { self.wram[0][a] }
            ADDR_WRAM1 => { self.wram[self.wram_idx][a] }
            ADDR_ECHO_RAM => { self.load_byte(echo_ram_mirror_addr(a) as u16) }
            ADDR_OAM => { self.ppu.oam[a] }
            ADDR_UNUSABLE => { 0 }
            ADDR_HRAM => { self.hram[a] }
            ADDR_IO_REGS => { self.read_reg(addr) }
            ADDR_IE => { self.read_reg(addr) }

            _ => { unreachable!() }
        }}
    }

    /// Writes one byte as the CPU would; writes to read-only registers are
    /// silently dropped inside `write_reg`.
    pub(crate) fn write(&mut self, addr: u16, val: u8) {
        self.last_write_addr.set(Some(addr));

        if self.breakpoints_enabled {
            for bp in self.write_breakpoints.iter() {
                if bp.matches(addr, val) {
                    bp.hit.set(true);
                }
            }
        }

        let addr = addr as usize;

        if is_cart_addr(addr) {
            self.cart.write(addr, val);
            return;
        }

        // Wave RAM overlaps the IO-register range, so it must be matched
        // first or those writes would fall through to `write_reg`.
        match_range! { a@addr {
            ADDR_AUDIO_WAVE_RAM => { self.apu.ch3.wave_ram[a] = val }

            ADDR_VRAM => { self.ppu.fetcher.vram[self.vram_idx][a] = val }
            ADDR_WRAM0 => { self.wram[0][a] = val}
            ADDR_WRAM1 => { self.wram[self.wram_idx][a] = val }
            ADDR_ECHO_RAM => { self.write(echo_ram_mirror_addr(a) as u16, val) }
            ADDR_OAM => { self.ppu.oam[a] = val }
            ADDR_UNUSABLE => {}
            ADDR_HRAM => { self.hram[a] = val}
            ADDR_IO_REGS => { self.write_reg(addr, val) }
            ADDR_IE => { self.write_reg(addr, val); }

            _ => { unreachable!() }
        }}
    }

    fn read_reg(&self, addr: usize) -> u8 {
        match addr {
            IO_JOYPAD => self.joypad.read(),
            IO_SB => self.serial.sb,
            IO_SC => self.serial.sc.read(),
            IO_DIV => self.timer.get_div(),
            IO_TIMA => self.timer.tima,
            IO_TMA => self.timer.tma,
            IO_TAC => self.timer.tac.read(),
            IO_IF => self.iflag.read(),
            IO_IE => self.ienable.read(),

            IO_NR10 => self.apu.ch1.nx0.read(),
            IO_NR11 => self.apu.ch1.nx1.read(),
            IO_NR12 => self.apu.ch1.nx2.read(),
            IO_NR13 => self.apu.ch1.nx3.period_low,
            IO_NR14 => self.apu.ch1.nx4.read(),
            IO_NR21 => self.apu.ch2.nx1.read(),
            IO_NR22 => self.apu.ch2.nx2.read(),
            IO_NR23 => self.apu.ch2.nx3.period_low,
            IO_NR24 => self.apu.ch2.nx4.read(),
            IO_NR30 => self.apu.ch3.n30.read(),
            IO_NR31 => self.apu.ch3.n31.length_period,
            IO_NR32 => self.apu.ch3.n32.read(),
            IO_NR33 => self.apu.ch3.n33.period_low,
            IO_NR34 => self.apu.ch3.n34.read(),
            IO_NR41 => self.apu.ch4.n41.read(),
            IO_NR42 => self.apu.ch4.n42.read(),
            IO_NR43 => self.apu.ch4.read_n43(),
            IO_NR44 => self.apu.ch4.n44.read(),
            IO_NR50 => self.apu.nr50.read(),
            IO_NR51 => self.apu.nr51.read(),
            IO_NR52 => self.apu.nr52.read(),

            IO_LCDC => self.ppu.fetcher.lcdc.read(),
            IO_STAT => self.ppu.stat.read(),
            IO_SCY => self.ppu.fetcher.scy,
            IO_SCX => self.ppu.fetcher.scx,
            IO_LY => self.ppu.ly,
            IO_LYC => self.ppu.lyc,
            IO_WY => self.ppu.fetcher.wy,
            IO_WX => self.ppu.fetcher.wx,
            IO_BGP => self.ppu.bgp,
            IO_OBP0 => self.ppu.obp0,
            IO_OBP1 => self.ppu.obp1,
            IO_BGPI => self.bgpi.read(),
            IO_BGPD => self.ppu.bg_palette[self.bgpi.addr as usize],
            IO_OBPI => self.obpi.read(),
            IO_OBPD => self.ppu.obj_palette[self.obpi.addr as usize],
            IO_OPRI => self.opri,

            IO_SVBK => self.wram_idx as u8,
            IO_VBK => self.vram_idx as u8,
            // HDMA1-4 (src/dst) are write-only on real hardware.
            IO_HDMA5 => {
                if self.hdma_active {
                    self.hdma_remaining_blocks
                } else {
                    0xFF
                }
            }
            IO_DMA => self.dma,
            IO_KEY1 => self.key1.read(),
            IO_RP => self.rp.read(),

            _ => 0,
        }
    }

    /// Writes a register and performs whatever side effect it implies;
    /// writes to read-only fields are masked away before they land.
    fn write_reg(&mut self, addr: usize, v: u8) {
        /// Write `val` but preserve whatever bits `keep_mask` selects.
        macro_rules! set {
            ($target:expr, $val:expr, $keep_mask:expr) => {{
                let combined = ($target.read() & $keep_mask) | ($val & !$keep_mask);
                $target.write(combined);
            }};
        }

        match addr {
            IO_JOYPAD => {
                set!(self.joypad, v, mask(4));
                self.update_joypad(self.dpad, self.buttons);
            }

            IO_SB => self.serial.sb = v,
            IO_SC => set!(self.serial.sc, v, mask(5) << 2),
            IO_DIV => self.timer.set_div(v),
            IO_TIMA => self.timer.tima = v,
            IO_TMA => self.timer.tma = v,
            IO_TAC => self.timer.tac.write(v),
            IO_IF => set!(self.iflag, v, !mask(5)),
            IO_IE => set!(self.ienable, v, !mask(5)),

            IO_NR10 => set!(self.apu.ch1.nx0, v, 1 << 7),
            IO_NR11 => self.apu.ch1.nx1.write(v),
            IO_NR12 => self.apu.ch1.nx2.write(v),
            IO_NR13 => self.apu.ch1.nx3.period_low = v,
            IO_NR14 => set!(self.apu.ch1.nx4, v, mask(3) << 3),

            IO_NR21 => self.apu.ch2.nx1.write(v),
            IO_NR22 => self.apu.ch2.nx2.write(v),
            IO_NR23 => self.apu.ch2.nx3.period_low = v,
            IO_NR24 => set!(self.apu.ch2.nx4, v, mask(3) << 3),

            IO_NR30 => set!(self.apu.ch3.n30, v, mask(7)),
            IO_NR31 => self.apu.ch3.n31.length_period = v,
            IO_NR32 => set!(self.apu.ch3.n32, v, 1 << 7 | mask(5)),
            IO_NR33 => self.apu.ch3.n33.period_low = v,
            IO_NR34 => set!(self.apu.ch3.n34, v, mask(3) << 3),

            IO_NR41 => set!(self.apu.ch4.n41, v, mask(2) << 6),
            IO_NR42 => self.apu.ch4.n42.write(v),
            IO_NR43 => self.apu.ch4.write_n43(v),
            IO_NR44 => set!(self.apu.ch4.n44, v, mask(6)),

            IO_NR50 => self.apu.nr50.write(v),
            IO_NR51 => self.apu.nr51.write(v),
            IO_NR52 => set!(self.apu.nr52, v, mask(7)),

            IO_LCDC => self.ppu.fetcher.lcdc.write(v),
            IO_STAT => set!(self.ppu.stat, v, mask(3)),
            IO_SCY => self.ppu.fetcher.scy = v,
            IO_SCX => self.ppu.fetcher.scx = v,
            IO_LY => (),
            IO_LYC => self.ppu.lyc = v,
            IO_WY => self.ppu.fetcher.wy = v,
            IO_WX => self.ppu.fetcher.wx = v,
            IO_BGP => self.ppu.bgp = v,
            IO_OBP0 => self.ppu.obp0 = v,
            IO_OBP1 => self.ppu.obp1 = v,
            IO_BGPI => self.bgpi.write(v),
            IO_OBPI => self.obpi.write(v),

            // CGB palette RAM is locked while the PPU is drawing (mode 3).
            IO_BGPD if self.get_mode() != MODE_DRAW => {
                self.ppu.bg_palette[self.bgpi.addr as usize] = v;
                if self.bgpi.auto_inc == 1 {
                    self.bgpi.addr = (self.bgpi.addr + 1) & mask(6);
                }
            }
            IO_OBPD if self.get_mode() != MODE_DRAW => {
                self.ppu.obj_palette[self.obpi.addr as usize] = v;
                if self.obpi.auto_inc == 1 {
                    self.obpi.addr = (self.obpi.addr + 1) & mask(6);
                }
            }

            IO_OPRI => self.opri = v & 1,
            IO_SVBK => {
                if self.is_2x {
                    self.wram_idx = if v == 0 { 1 } else { (v & mask(3)) as usize };
                }
            }
            IO_VBK => {
                if self.is_2x {
                    self.vram_idx = (v as usize) & 1
                }
            }

            IO_HDMA1 => self.hdma_src = (self.hdma_src & 0x00FF) | (v as u16) << 8,
            IO_HDMA2 => self.hdma_src = (self.hdma_src & 0xFF00) | (v & 0xF0) as u16,
            IO_HDMA3 => self.hdma_dst = (self.hdma_dst & 0x00FF) | ((v & 0x1F) as u16) << 8,
            IO_HDMA4 => self.hdma_dst = (self.hdma_dst & 0x1F00) | (v & 0xF0) as u16,
            IO_HDMA5 => self.handle_hdma5_write(v),
            IO_DMA => self.run_oam_dma(v),
            IO_KEY1 => set!(self.key1, v, !mask(1)),
            IO_RP => set!(self.rp, v, 1 << 1),

            _ => (),
        }
    }

    /// OR `iflag`'s set bits into IF.
    pub(crate) fn add_interrupt(&mut self, iflag: IntrBits) {
        let val = self.iflag.read() | iflag.read();
        self.iflag.write(val);
    }

    /// Recompute the joypad/P1 register from the guest's button state and
    /// raise a joypad interrupt if any selected line just went low.
    pub(crate) fn update_joypad(&mut self, dpad: DPad, btns: ActionButtons) {
        let mut new_state = mask(4); // In P1, a 0 bit means "pressed".

        if self.joypad.select_dpad == 0 {
            new_state &= !dpad.read();
        }
        if self.joypad.select_buttons == 0 {
            new_state &= !btns.read();
        }

        // The interrupt fires only on a 1->0 transition in the low nibble.
        if (self.joypad.state & !new_state) & mask(4) != 0 {
            self.add_interrupt(IntrBits {
                joypad: 1,
                ..Default::default()
            });
        }

        self.joypad.state = new_state;
        self.dpad = dpad;
        self.buttons = btns;
    }

    pub(crate) fn get_mode(&self) -> u8 {
        self.ppu.stat.ppu_mode
    }

    /// Returns and clears the address touched by the most recent write, if
    /// any, for the disassembler's cache-invalidation pass.
    pub(crate) fn take_last_write_addr(&self) -> Option<u16> {
        self.last_write_addr.take()
    }

    /// OAM DMA: `addr` gives the source page (`addr << 8`), wrapping any
    /// value above `$DF` back into range.
    fn run_oam_dma(&mut self, addr: u8) {
        let src_base = (addr as usize % DMA_SRC_PAGE_COUNT) << 8;
        self.dma = addr;

        for (i, _) in ADDR_OAM.enumerate() {
            self.ppu.oam[i] = self.read((src_base + i) as u16);
        }
    }

    /// A write to HDMA5 either starts a general-purpose transfer right
    /// away, or arms an H-blank transfer to be drained incrementally by
    /// `run_hdma_hblank_chunk`. Writing bit 7 = 0 while an H-blank
    /// transfer is active cancels it instead.
    fn handle_hdma5_write(&mut self, v: u8) {
        let requested = Hdma5::new(v);

        if self.hdma_active && requested.hblank_mode == 0 {
            self.hdma_active = false;
            log::debug!(
                "mmu: hdma cancelled with {} blocks remaining",
                self.hdma_remaining_blocks + 1
            );
            return;
        }

        self.hdma5 = requested;
        self.hdma_remaining_blocks = requested.length;

        if requested.hblank_mode == 0 {
            let len = (requested.length as usize + 1) * HDMA_HBLANK_CHUNK;
            log::debug!("mmu: general-purpose hdma, {len} bytes");
            self.copy_hdma_bytes(len);
        } else {
            log::debug!("mmu: h-blank hdma armed, {} blocks", requested.length + 1);
            self.hdma_active = true;
        }
    }

    fn run_hdma_hblank_chunk(&mut self) {
        self.copy_hdma_bytes(HDMA_HBLANK_CHUNK);

        if self.hdma_remaining_blocks == 0 {
            self.hdma_active = false;
        } else {
            self.hdma_remaining_blocks -= 1;
        }
    }

    fn copy_hdma_bytes(&mut self, count: usize) {
        let vram_mask = SIZE_VRAM_BANK - 1;
        for _ in 0..count {
            let b = self.read(self.hdma_src);
            self.ppu.fetcher.vram[self.vram_idx][self.hdma_dst as usize & vram_mask] = b;
            self.hdma_src = self.hdma_src.wrapping_add(1);
            self.hdma_dst = self.hdma_dst.wrapping_add(1);
        }
    }
}

#[inline]
fn is_cart_addr(addr: usize) -> bool {
    in_ranges!(addr, ADDR_ROM0, ADDR_ROM1, ADDR_EXT_RAM)
}

/// Map an echo-RAM address onto its backing WRAM address (13-bit mirror).
#[inline]
fn echo_ram_mirror_addr(rel_addr: usize) -> usize {
    (rel_addr & ECHO_RAM_ADDR_MASK) + *ADDR_WRAM0.start()
}

#[inline(always)]
const fn mask(bit_cnt: u32) -> u8 {
    u8::MAX >> (8 - bit_cnt)
}
