//! Address-keyed cache of decoded instructions. Built once at load time by
//! a linear sweep over ROM, external RAM and WRAM; a write landing inside
//! an already-decoded entry's span re-decodes just that entry in place
//! rather than re-walking the whole range.

use std::collections::BTreeMap;

use crate::cpu::decoder;
use crate::cpu::isa::Instr;
use crate::mem::Mmu;

/// One decoded instruction as recorded by the [`Disassembler`].
#[derive(Debug, Clone)]
pub struct DecodedInstr {
    pub address: u16,
    pub length: u8,
    pub opcode: String,
    pub mnemonic: String,
}

impl DecodedInstr {
    fn decode_at(mmu: &Mmu, addr: u16) -> Self {
        let (instr, next) = decoder::decode(mmu, addr);
        let length = next.wrapping_sub(addr).clamp(1, u8::MAX as u16) as u8;

        Self {
            address: addr,
            length,
            opcode: format_opcode(&instr),
            mnemonic: instr.to_string(),
        }
    }

    fn contains(&self, addr: u16) -> bool {
        addr.wrapping_sub(self.address) < self.length as u16
    }
}

fn format_opcode(instr: &Instr) -> String {
    format!("{:?}", instr.op).to_ascii_uppercase()
}

/// Covers ROM banks 0/1, external RAM and WRAM; MMIO, VRAM and OAM are
/// never meaningfully "disassembled" so are left out of the sweep.
const SCAN_START: u16 = 0x0000;
const SCAN_END: u16 = 0xDFFF;

pub struct Disassembler {
    entries: BTreeMap<u16, DecodedInstr>,
}

impl Disassembler {
    pub(crate) fn new(mmu: &Mmu) -> Self {
        let mut entries = BTreeMap::new();
        let mut addr: u32 = SCAN_START as u32;

        while addr <= SCAN_END as u32 {
            let decoded = DecodedInstr::decode_at(mmu, addr as u16);
            let step = decoded.length as u32;
            entries.insert(addr as u16, decoded);
            addr += step;
        }

        Self { entries }
    }

    /// Re-decode the entry covering `addr`, if the last write touched one.
    pub(crate) fn invalidate(&mut self, mmu: &Mmu, addr: u16) {
        let Some((&start, entry)) = self.entries.range(..=addr).next_back() else {
            return;
        };
        if !entry.contains(addr) {
            return;
        }
        self.entries.insert(start, DecodedInstr::decode_at(mmu, start));
    }

    /// The decoded instruction starting exactly at `address`, if cached.
    pub fn get(&self, address: u16) -> Option<&DecodedInstr> {
        self.entries.get(&address)
    }

    /// All decoded entries in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = &DecodedInstr> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    fn mmu_for(rom: &[u8]) -> Mmu {
        let mut full = vec![0u8; 0x8000];
        full[..rom.len().min(full.len())].copy_from_slice(&rom[..rom.len().min(full.len())]);
        full[0x148] = 0x00;
        full[0x149] = 0x00;
        let cart = Cartridge::new(&full).unwrap();
        Mmu::new(cart, false)
    }

    #[test]
    fn decodes_a_leading_nop_and_jump() {
        // NOP; JP $0150
        let mut rom = vec![0x00, 0xC3, 0x50, 0x01];
        rom.resize(0x8000, 0);
        let mmu = mmu_for(&rom);

        let disasm = Disassembler::new(&mmu);
        let first = disasm.get(0x0000).unwrap();
        assert_eq!(first.length, 1);
        assert_eq!(first.opcode, "NOP");

        let second = disasm.get(0x0001).unwrap();
        assert_eq!(second.length, 3);
        assert_eq!(second.opcode, "JP");
        assert!(second.mnemonic.contains("0150"));
    }

    #[test]
    fn write_inside_a_span_is_redecoded() {
        // ROM writes hit MBC registers rather than backing bytes, so
        // exercise this against WRAM, which is genuinely writable.
        // LD BC, $1234 placed at 0xC000 (3 bytes), then the low immediate
        // byte is overwritten and the cached entry must pick it up.
        let rom = vec![0u8; 0x8000];
        let mut mmu = mmu_for(&rom);
        mmu.write(0xC000, 0x01);
        mmu.write(0xC001, 0x34);
        mmu.write(0xC002, 0x12);

        let mut disasm = Disassembler::new(&mmu);
        assert!(disasm.get(0xC000).unwrap().mnemonic.contains("1234"));

        mmu.write(0xC001, 0x99);
        disasm.invalidate(&mmu, 0xC001);

        assert!(disasm.get(0xC000).unwrap().mnemonic.contains("1299"));
    }
}
