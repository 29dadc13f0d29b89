//! The top-level aggregate. `Machine` owns the CPU (and, through it, every
//! other component) by value; there is exactly one external entry point,
//! [`Machine::tick`], which advances emulation by one CPU instruction (or
//! one serviced interrupt) at a time. Everything else is state retrieval:
//! frames, audio samples, save data, disassembly.

use std::path::Path;

use crate::{
    cartridge::Cartridge,
    config::Config,
    cpu::Cpu,
    disasm::Disassembler,
    error::{EmulatorError, Result},
    frame::Frame,
    info,
    mem::{Breakpoint, Mmu},
    msg::ButtonState,
};

/// A fully loaded, runnable Game Boy / Game Boy Color machine.
pub struct Machine {
    cpu: Cpu,
    disasm: Disassembler,
}

impl Machine {
    /// Load `rom` and bring the machine up to the state the boot ROM
    /// hands off to cartridge code in, per `config`.
    pub fn new(rom: &[u8], config: Config) -> Result<Self> {
        let cart = Cartridge::new(rom)?;
        let mut mmu = Mmu::new(cart, config.breakpoints_enabled);

        // `Config::is_cgb` is authoritative over the cartridge header's own
        // CGB-support flag: it selects hardware variant, not compatibility.
        mmu.cart.is_cgb = config.is_cgb;
        mmu.ppu.fetcher.is_cgb = config.is_cgb;
        mmu.apu.start_new_sampling(info::AUDIO_SAMPLE_PERIOD_DOTS);

        let mut cpu = Cpu::new(mmu, config.ei_delay);
        cpu.trace_execution = config.trace;
        post_boot_init(&mut cpu);

        let disasm = Disassembler::new(&cpu.mmu);

        Ok(Self { cpu, disasm })
    }

    /// Advance the machine by exactly one CPU instruction (or interrupt
    /// service routine entry). Returns `true` iff the GPU entered
    /// vertical-blank during this step.
    pub fn tick(&mut self) -> bool {
        let was_vblank = self.cpu.mmu.get_mode() == info::MODE_VBLANK;

        self.cpu.step();

        if let Some(addr) = self.cpu.mmu.take_last_write_addr() {
            self.disasm.invalidate(&self.cpu.mmu, addr);
        }

        !was_vblank && self.cpu.mmu.get_mode() == info::MODE_VBLANK
    }

    /// Apply the current state of every button at once.
    pub fn set_buttons(&mut self, buttons: ButtonState) {
        let (dpad, action) = buttons.to_internal_repr();
        self.cpu.mmu.update_joypad(dpad, action);
    }

    /// Copy the current completed frame into `frame`.
    pub fn fill_frame(&self, frame: &mut Frame) {
        self.cpu.mmu.ppu.fill_frame(frame);
    }

    /// Drain stereo audio samples accumulated since the last call.
    pub fn drain_audio_samples(&mut self) -> Vec<f32> {
        self.cpu
            .mmu
            .apu
            .start_new_sampling(info::AUDIO_SAMPLE_PERIOD_DOTS)
    }

    /// Load battery-backed save data previously written by
    /// [`Machine::save_to_file`]. A no-op if the cartridge has no battery.
    pub fn load_save_file(&mut self, path: &Path) -> Result<()> {
        if !self.cpu.mmu.cart.has_battery {
            return Ok(());
        }

        let bytes = std::fs::read(path).map_err(|source| EmulatorError::SaveFileIo {
            path: path.to_path_buf(),
            source,
        })?;

        self.cpu.mmu.cart.load_save(&bytes).map_err(|corrupted| {
            if corrupted {
                EmulatorError::SaveFileCorrupted { path: path.to_path_buf() }
            } else {
                EmulatorError::SaveFileMismatch { path: path.to_path_buf() }
            }
        })
    }

    /// Persist battery-backed save data. A no-op if the cartridge has no
    /// battery.
    pub fn save_to_file(&mut self, path: &Path) -> Result<()> {
        if !self.cpu.mmu.cart.has_battery {
            return Ok(());
        }

        let bytes = self.cpu.mmu.cart.save();
        std::fs::write(path, bytes).map_err(|source| EmulatorError::SaveFileIo {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Register a breakpoint on CPU-initiated memory reads. Only consulted
    /// while `Config::breakpoints_enabled` was set at construction.
    pub fn add_read_breakpoint(&mut self, bp: Breakpoint) {
        self.cpu.mmu.read_breakpoints.push(bp);
    }

    /// Register a breakpoint on CPU-initiated memory writes.
    pub fn add_write_breakpoint(&mut self, bp: Breakpoint) {
        self.cpu.mmu.write_breakpoints.push(bp);
    }

    /// True for every breakpoint that has fired since it was last cleared.
    pub fn read_breakpoints_hit(&self) -> impl Iterator<Item = &Breakpoint> {
        self.cpu.mmu.read_breakpoints.iter().filter(|bp| bp.hit.get())
    }

    /// True for every write breakpoint that has fired since it was last
    /// cleared.
    pub fn write_breakpoints_hit(&self) -> impl Iterator<Item = &Breakpoint> {
        self.cpu.mmu.write_breakpoints.iter().filter(|bp| bp.hit.get())
    }

    /// The decode cache covering ROM, external RAM and WRAM.
    pub fn disassembler(&self) -> &Disassembler {
        &self.disasm
    }

    /// Current program counter, for trace/debugger front-ends.
    pub fn pc(&self) -> u16 {
        self.cpu.pc.0
    }
}

/// Register state the boot ROM hands off to cartridge code with, absent an
/// actual boot ROM image to execute.
fn post_boot_init(cpu: &mut Cpu) {
    cpu.pc.0 = 0x0100;
    cpu.sp.0 = 0xFFFE;

    let m = &mut cpu.mmu;
    m.joypad.write(0xCF);
    m.wram_idx = 1;
    m.ppu.bgp = 0xFC;
    m.ppu.fetcher.lcdc.write(0x91);
    m.ppu.stat.write(0x85);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rom(is_cgb: bool) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x143] = if is_cgb { 0xC0 } else { 0x00 };
        rom[0x147] = 0x00; // ROM ONLY
        rom[0x148] = 0x00; // 32KiB
        rom[0x149] = 0x00; // no RAM
        rom
    }

    #[test]
    fn new_machine_starts_past_the_boot_rom() {
        let m = Machine::new(&test_rom(false), Config::default()).unwrap();
        assert_eq!(m.pc(), 0x0100);
    }

    #[test]
    fn ticking_an_infinite_loop_never_panics() {
        // JP $0100: spins on itself forever.
        let mut rom = test_rom(false);
        rom[0x100] = 0xC3;
        rom[0x101] = 0x00;
        rom[0x102] = 0x01;

        let mut m = Machine::new(&rom, Config::default()).unwrap();
        for _ in 0..10_000 {
            m.tick();
        }
        assert_eq!(m.pc(), 0x0100);
    }

    #[test]
    fn save_round_trips_through_a_battery_backed_cartridge() {
        let mut rom = test_rom(false);
        rom[0x147] = 0x03; // MBC1+RAM+BATTERY
        rom[0x149] = 0x02; // 8KiB RAM

        let dir = std::env::temp_dir();
        let path = dir.join(format!("gbemu-test-save-{:p}.gem", &rom));

        let mut m = Machine::new(&rom, Config::default()).unwrap();
        m.save_to_file(&path).unwrap();
        m.load_save_file(&path).unwrap();

        let _ = std::fs::remove_file(&path);
    }
}
