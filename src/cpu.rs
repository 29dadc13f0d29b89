pub(crate) mod decoder;
pub(crate) mod isa;
mod table;

use bincode::{Decode, Encode};
use std::num::Wrapping;

use crate::{info, macros::bit_fields, mem::Mmu, regs::Key1};
use isa::{Cond, Instr, Opcode, Operand, Reg};

/// Sharp SM83 core with double-speed (CGB) support. Opcode semantics follow
/// https://rgbds.gbdev.io/docs/v0.8.0/gbz80.7; only state relevant to guest
/// execution is persisted across save/load, presentation buffers (audio
/// samples, video frame) live elsewhere and are rebuilt on demand.
pub struct Cpu {
    pub(crate) mmu: Mmu,
    pub(crate) state: CpuState,
    pub(crate) frequency: u32,
    pub(crate) trace_execution: bool,
    /// Whether `EI` delays IME by one instruction (hardware-accurate) or
    /// takes effect immediately; supplied by [`crate::Config`] and not
    /// part of persisted state.
    pub(crate) ei_delay: bool,

    pub(crate) pc: Wrapping<u16>,
    pub(crate) sp: Wrapping<u16>,
    flags: Flags,
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,

    ime: bool,
    /// IME takes effect after the *next* instruction retires, per the
    /// documented one-instruction `EI` delay.
    ime_pending: bool,
}

// `ei_delay` is config-supplied, debug-only state and is intentionally not
// persisted (bincode_derive 2.0.1 has no `#[bincode(skip)]` support, so this
// mirrors what the derive would generate for the other fields).
impl Encode for Cpu {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        Encode::encode(&self.mmu, encoder)?;
        Encode::encode(&self.state, encoder)?;
        Encode::encode(&self.frequency, encoder)?;
        Encode::encode(&self.trace_execution, encoder)?;
        Encode::encode(&self.pc, encoder)?;
        Encode::encode(&self.sp, encoder)?;
        Encode::encode(&bincode::serde::Compat(&self.flags), encoder)?;
        Encode::encode(&self.a, encoder)?;
        Encode::encode(&self.b, encoder)?;
        Encode::encode(&self.c, encoder)?;
        Encode::encode(&self.d, encoder)?;
        Encode::encode(&self.e, encoder)?;
        Encode::encode(&self.h, encoder)?;
        Encode::encode(&self.l, encoder)?;
        Encode::encode(&self.ime, encoder)?;
        Encode::encode(&self.ime_pending, encoder)?;
        Ok(())
    }
}

impl<Context> Decode<Context> for Cpu {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Ok(Self {
            mmu: Decode::decode(decoder)?,
            state: Decode::decode(decoder)?,
            frequency: Decode::decode(decoder)?,
            trace_execution: Decode::decode(decoder)?,
            ei_delay: Default::default(),
            pc: Decode::decode(decoder)?,
            sp: Decode::decode(decoder)?,
            flags: (<bincode::serde::Compat<_> as Decode<Context>>::decode(decoder)?).0,
            a: Decode::decode(decoder)?,
            b: Decode::decode(decoder)?,
            c: Decode::decode(decoder)?,
            d: Decode::decode(decoder)?,
            e: Decode::decode(decoder)?,
            h: Decode::decode(decoder)?,
            l: Decode::decode(decoder)?,
            ime: Decode::decode(decoder)?,
            ime_pending: Decode::decode(decoder)?,
        })
    }
}

impl<'de, Context> bincode::BorrowDecode<'de, Context> for Cpu {
    fn borrow_decode<D: bincode::de::BorrowDecoder<'de, Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Decode::decode(decoder)
    }
}

#[derive(Default, PartialEq, Eq, Encode, Decode)]
pub(crate) enum CpuState {
    #[default]
    Running,
    /// Execution is suspended until any enabled interrupt becomes pending.
    Halted,
    /// Execution is suspended until a joypad interrupt occurs; also resets
    /// the timer divider. Hardware STOP behaviour around this is
    /// under-specified, so this models it as HALT-with-reset.
    Stopped,
}

bit_fields! {
    struct Flags<u8> {
        _0: 4,
        c:1,
        h:1,
        n:1,
        z:1,
    }
}

/// LDH-class operands (`[C]`, `[imm8]`) are offset into the `$FF00` page.
const HRAM_BASE: u16 = 0xFF00;
/// Cycles spent servicing an interrupt: two wasted M-cycles, a PC push,
/// and the jump itself.
const INTERRUPT_SERVICE_MCYCLES: u32 = 5;

impl Cpu {
    pub(crate) fn new(mmu: Mmu, ei_delay: bool) -> Self {
        Self {
            mmu,
            state: CpuState::Running,
            frequency: info::FREQUENCY,
            trace_execution: false,
            ei_delay,

            pc: Wrapping(0),
            sp: Wrapping(0),
            flags: Default::default(),
            a: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,

            ime: false,
            ime_pending: false,
        }
    }

    /// Run one atomic step — service a pending interrupt, or else execute
    /// the next instruction — and return the M-cycles it consumed.
    pub(crate) fn step(&mut self) -> u32 {
        let pending_before = self.ime_pending;

        let mcycles = match self.service_interrupt() {
            Some(cycles) => cycles,
            None => match self.state {
                CpuState::Running => self.execute_one(),
                CpuState::Halted | CpuState::Stopped => 1,
            },
        };

        // Only commit the delayed IME flip if nothing (e.g. a fresh `EI`)
        // re-armed it during this very step.
        if self.ime_pending && pending_before == self.ime_pending {
            self.ime = true;
            self.ime_pending = false;
        }

        self.mmu.tick(mcycles);
        mcycles
    }

    /// If an enabled interrupt is pending, dispatch to its vector and
    /// return the M-cycles consumed; otherwise return `None`.
    fn service_interrupt(&mut self) -> Option<u32> {
        let pending = self.mmu.iflag.masked(self.mmu.ienable);

        self.wake_if_pending(pending.read() != 0, pending.joypad == 1);

        if !self.ime || pending.read() == 0 {
            return None;
        }

        // Checked in hardware priority order: VBlank, STAT, Timer, Serial, Joypad.
        const VECTORS: [(fn(&crate::regs::IntrBits) -> bool, u16); 5] = [
            (|i| i.vblank == 1, info::INT_VBLANK_VEC),
            (|i| i.stat == 1, info::INT_STAT_VEC),
            (|i| i.timer == 1, info::INT_TIMER_VEC),
            (|i| i.serial == 1, info::INT_SERIAL_VEC),
            (|i| i.joypad == 1, info::INT_JOYPAD_VEC),
        ];

        let (_, vector) = VECTORS
            .iter()
            .find(|(is_set, _)| is_set(&pending))
            .copied()
            .expect("at least one interrupt bit is set");

        let mut iflag = self.mmu.iflag;
        match vector {
            v if v == info::INT_VBLANK_VEC => iflag.vblank = 0,
            v if v == info::INT_STAT_VEC => iflag.stat = 0,
            v if v == info::INT_TIMER_VEC => iflag.timer = 0,
            v if v == info::INT_SERIAL_VEC => iflag.serial = 0,
            _ => iflag.joypad = 0,
        }

        self.mmu.iflag = iflag;
        self.ime = false;
        self.push_u16(self.pc.0);
        self.pc.0 = vector;
        Some(INTERRUPT_SERVICE_MCYCLES)
    }

    /// Low-power states end as soon as a servicable interrupt is raised;
    /// the HALT/STOP instruction-skip bugs are not modeled.
    fn wake_if_pending(&mut self, any_interrupt: bool, joypad_interrupt: bool) {
        let should_wake = (self.state == CpuState::Halted && any_interrupt)
            || (self.state == CpuState::Stopped && joypad_interrupt);

        if should_wake {
            self.state = CpuState::Running;
        }
    }

    fn execute_one(&mut self) -> u32 {
        let pc_before = self.pc.0;
        let ins = self.fetch();
        let mut mcycles = ins.mcycles;

        let (oa, ob) = (ins.op1, ins.op2);
        let a = self.read_operand(oa);
        let b = self.read_operand(ob);

        self.dispatch(ins.op, oa, ob, a, b, ins.branch_mcycles, &mut mcycles);

        if self.trace_execution {
            self.trace(pc_before, ins, oa, ob, a);
        }

        mcycles as u32
    }

    /// Carries out the effect of one decoded opcode. Extra M-cycles for
    /// taken branches are written back through `mcycles`.
    #[allow(clippy::too_many_arguments)]
    fn dispatch(
        &mut self,
        op: Opcode,
        oa: Operand,
        ob: Operand,
        a: u16,
        b: u16,
        branch_mcycles: u8,
        mcycles: &mut u8,
    ) {
        use Opcode::*;
        match op {
            Ld | Ldh => self.exec_load(oa, ob, b),

            Push => self.push_u16(a),
            Pop => {
                let r = self.pop_u16();
                self.write_operand(oa, r);
            }

            Inc | Dec => {
                let r = self.apply_inc_dec(matches!(op, Inc), oa, a);
                self.write_operand(oa, r);
            }

            Add if is_reg16(oa) => {
                let r = self.apply_16bit_add(ob, a, b);
                self.write_operand(oa, r);
            }
            Add | Adc | Sub | Sbc | Cp | And | Xor | Or => {
                let r = self.apply_8bit_alu(op, a as u8, b as u8);
                self.write_operand(oa, r as u16);
            }

            Rlca | Rlc | Rrca | Rrc | Rla | Rl | Rra | Rr | Sla | Sra | Srl => {
                // These implicitly target A when un-prefixed.
                let (oa, a) = if matches!(op, Rlca | Rrca | Rla | Rra) {
                    (Operand::Reg(Reg::A), self.a as u16)
                } else {
                    (oa, a)
                };
                let r = self.apply_rotate_shift(op, a as u8);
                self.write_operand(oa, r as u16);
            }

            Swap => {
                let r = ((a >> 4) & 0xF) | ((a & 0xF) << 4);
                self.set_carry_and_zero(0, r as u8);
                self.write_operand(oa, r);
            }

            Bit => {
                self.flags.z = is_zero((b >> a) & 1);
                self.flags.n = 0;
                self.flags.h = 1;
            }
            Res => self.write_operand(ob, b & !(1 << a)),
            Set => self.write_operand(ob, b | (1 << a)),

            Jr | Jp | Call | Ret | Reti | Rst => {
                if self.apply_branch(op, oa, a, b) {
                    *mcycles = branch_mcycles;
                }
            }

            Di => self.ime = false,
            // Real hardware only commits IME on the instruction boundary
            // *after* EI; `ei_delay` lets that be disabled for ROMs that
            // assume an immediate effect.
            Ei => {
                if self.ei_delay {
                    self.ime_pending = true;
                } else {
                    self.ime = true;
                }
            }
            Halt => self.state = CpuState::Halted,

            Stop => {
                if self.mmu.cart.is_cgb && self.mmu.key1.armed == 1 && self.mmu.key1.speed == 0 {
                    log::info!("cpu: entering double-speed mode");
                    self.engage_double_speed();
                } else {
                    self.state = CpuState::Stopped;
                }
                self.mmu.timer.reset_div();
            }

            Cpl => {
                self.a = !self.a;
                self.flags.n = 1;
                self.flags.h = 1;
            }
            Ccf => {
                self.flags.c = !self.flags.c & 1;
                self.flags.n = 0;
                self.flags.h = 0;
            }
            Scf => {
                self.flags.c = 1;
                self.flags.n = 0;
                self.flags.h = 0;
            }
            Nop => (),
            Daa => self.apply_daa_correction(),

            Illegal | Prefix => log::warn!("cpu: illegal opcode fetched, treating as a no-op"),
        }
    }

    fn exec_load(&mut self, oa: Operand, ob: Operand, b: u16) {
        // `LD [a16], SP` is the one load that writes two bytes.
        if let (Operand::A16(addr), Operand::Reg(Reg::SP)) = (oa, ob) {
            let [hi, lo] = self.sp.0.to_be_bytes();
            self.mmu.write(addr, lo);
            self.mmu.write(addr.wrapping_add(1), hi);
        } else {
            self.write_operand(oa, b);
        }

        // Only `LD` ever carries a `[HL+]`/`[HL-]` operand.
        let delta = hl_postfix_delta(oa) + hl_postfix_delta(ob);
        let hl = self.get_reg(Reg::HL).wrapping_add_signed(delta);
        self.set_reg(Reg::HL, hl);

        if let Operand::SPplusI8(e) = ob {
            let signed = (e as i16) as u16;
            self.flags.write(0);
            self.flags.h = is_carry(self.sp.0, signed, 4);
            self.flags.c = is_carry(self.sp.0, signed, 8);
        }
    }

    fn fetch(&mut self) -> Instr {
        let (ins, pc) = decoder::decode(&self.mmu, self.pc.0);
        if pc < self.pc.0 {
            log::warn!("cpu: PC overflowed back to zero")
        }

        self.pc.0 = pc;
        ins
    }

    fn trace(&self, old_pc: u16, ins: Instr, oa: Operand, ob: Operand, a: u16) {
        let new_a = self.read_operand(oa);
        let b = self.read_operand(ob);
        let operand_summary = format!("[{oa}={a}|{new_a} {ob}={b}]");
        eprintln!(
            "{operand_summary:30} [Z{} N{} C{}] [PC:${:04X} IVEC({}): {:05b}] {}",
            self.flags.z,
            self.flags.n,
            self.flags.c,
            old_pc,
            self.ime as u8,
            self.mmu.iflag.read(),
            ins,
        );
    }

    /// Resolve an operand to its numeric value; `Cond` has no numeric
    /// meaning and always reads as 0.
    fn read_operand(&self, op: Operand) -> u16 {
        match op {
            Operand::Absent => 0,
            Operand::Reg(r) => self.get_reg(r),
            Operand::RegMem(r) => self.mmu.read(self.indirect_addr(r)) as u16,

            Operand::Cond(_) => 0,
            Operand::B3(b) => b as u16,
            Operand::Tgt(t) => t as u16,

            // Sign-extending a two's-complement byte into u16 and adding it
            // as unsigned gives the correct wrapped result either way.
            Operand::I8(i) => (i as i16) as u16,
            Operand::U8(u) => u as u16,
            Operand::U16(u) => u,
            Operand::SPplusI8(i) => (self.sp.0 as i32 + i as i32) as u16,

            Operand::A8(u) => self.mmu.read(u as u16 + HRAM_BASE) as u16,
            Operand::A16(u) => self.mmu.read(u) as u16,
        }
    }

    /// Write a value through a destination operand; panics for operands
    /// that cannot be a write target.
    fn write_operand(&mut self, op: Operand, val: u16) {
        match op {
            Operand::Reg(r) => self.set_reg(r, val),
            Operand::RegMem(r) => self.mmu.write(self.indirect_addr(r), val as u8),
            Operand::A8(u) => self.mmu.write(u as u16 + HRAM_BASE, val as u8),
            Operand::A16(u) => self.mmu.write(u, val as u8),
            _ => panic!("operand {op:?} has no writable location"),
        }
    }

    fn indirect_addr(&self, r: Reg) -> u16 {
        match r {
            Reg::C => self.get_reg(Reg::C) + HRAM_BASE,
            Reg::BC | Reg::DE => self.get_reg(r),
            Reg::HL | Reg::HLinc | Reg::HLdec => self.get_reg(Reg::HL),
            _ => panic!("register {r:?} has no indirect-addressing mode"),
        }
    }

    fn get_reg(&self, r: Reg) -> u16 {
        let bytes = match r {
            Reg::A => [0, self.a],
            Reg::B => [0, self.b],
            Reg::C => [0, self.c],
            Reg::D => [0, self.d],
            Reg::E => [0, self.e],
            Reg::H => [0, self.h],
            Reg::L => [0, self.l],
            Reg::AF => [self.a, self.flags.read()],
            Reg::BC => [self.b, self.c],
            Reg::DE => [self.d, self.e],
            Reg::HL => [self.h, self.l],
            Reg::SP => self.sp.0.to_be_bytes(),
            _ => unreachable!(),
        };

        u16::from_be_bytes(bytes)
    }

    fn set_reg(&mut self, r: Reg, v: u16) {
        let [hi, lo] = v.to_be_bytes();

        match r {
            Reg::A => self.a = lo,
            Reg::B => self.b = lo,
            Reg::C => self.c = lo,
            Reg::D => self.d = lo,
            Reg::E => self.e = lo,
            Reg::H => self.h = lo,
            Reg::L => self.l = lo,
            Reg::AF => {
                self.a = hi;
                self.flags.write(lo & 0xF0); // the low nibble of F is always zero
            }
            Reg::BC => (self.b, self.c) = (hi, lo),
            Reg::DE => (self.d, self.e) = (hi, lo),
            Reg::HL => (self.h, self.l) = (hi, lo),
            Reg::SP => self.sp = Wrapping(v),
            _ => unreachable!(),
        }
    }

    // --- helpers for individual instruction classes --------------------

    fn push_u16(&mut self, v: u16) {
        let [hi, lo] = v.to_be_bytes();
        self.sp -= 1;
        self.mmu.write(self.sp.0, hi);
        self.sp -= 1;
        self.mmu.write(self.sp.0, lo);
    }

    fn pop_u16(&mut self) -> u16 {
        let lo = self.mmu.read(self.sp.0);
        self.sp += 1;
        let hi = self.mmu.read(self.sp.0);
        self.sp += 1;
        u16::from_be_bytes([hi, lo])
    }

    fn apply_inc_dec(&mut self, is_inc: bool, oa: Operand, a: u16) -> u16 {
        if is_reg16(oa) {
            // 16-bit INC/DEC never touches the flags.
            return if is_inc {
                a.wrapping_add(1)
            } else {
                a.wrapping_sub(1)
            };
        }

        let r = if is_inc {
            self.flags.n = 0;
            self.flags.h = is_carry(a, 1, 4);
            (a as u8).wrapping_add(1) as u16
        } else {
            self.flags.n = 1;
            self.flags.h = is_borrow(a, 1, 4);
            (a as u8).wrapping_sub(1) as u16
        };

        self.flags.z = is_zero(r);
        r
    }

    /// Handles both "ADD HL, r16" and "ADD SP, e8" — the second operand's
    /// shape tells them apart, since the flag rules differ.
    fn apply_16bit_add(&mut self, ob: Operand, a: u16, b: u16) -> u16 {
        let r = a.wrapping_add(b);
        let overflowed_at = |bits: u32| is_carry(a, b, bits);

        if matches!(ob, Operand::I8(_)) {
            self.flags.z = 0;
            self.flags.h = overflowed_at(4);
            self.flags.c = overflowed_at(8);
        } else {
            self.flags.h = overflowed_at(12);
            self.flags.c = overflowed_at(16);
        }
        self.flags.n = 0;

        r
    }

    fn apply_8bit_alu(&mut self, op: Opcode, a: u8, b: u8) -> u8 {
        let carry_in = self.flags.c;

        use Opcode::*;
        let result = match op {
            Add => a.wrapping_add(b),
            Adc => a.wrapping_add(b).wrapping_add(carry_in),
            Sub | Cp => a.wrapping_sub(b),
            Sbc => a.wrapping_sub(b).wrapping_sub(carry_in),
            And => a & b,
            Xor => a ^ b,
            Or => a | b,
            _ => unreachable!(),
        };

        self.flags.write(0);
        self.flags.z = is_zero(result as u16);

        let (a16, b16, c16) = (a as u16, b as u16, carry_in as u16);
        match op {
            Add => {
                self.flags.h = is_carry(a16, b16, 4);
                self.flags.c = is_carry(a16, b16, 8);
            }
            Adc => {
                self.flags.h = is_carry_with_carry_in(a16, b16, c16, 4);
                self.flags.c = is_carry_with_carry_in(a16, b16, c16, 8);
            }
            Sub | Cp => {
                self.flags.h = is_borrow(a16, b16, 4);
                self.flags.c = is_borrow(a16, b16, 8);
                self.flags.n = 1;
            }
            Sbc => {
                self.flags.h = is_borrow_with_carry_in(a16, b16, c16, 4);
                self.flags.c = is_borrow_with_carry_in(a16, b16, c16, 8);
                self.flags.n = 1;
            }
            And => self.flags.h = 1,
            _ => (),
        }

        if matches!(op, Opcode::Cp) {
            a
        } else {
            result
        }
    }

    /// Shared implementation for every rotate/shift opcode; left-shifts
    /// feed the carry from the MSB, right-shifts from the LSB.
    fn apply_rotate_shift(&mut self, op: Opcode, a: u8) -> u8 {
        use Opcode::*;
        let r = match op {
            Rlca | Rlc => a.rotate_left(1),
            Rrca | Rrc => a.rotate_right(1),
            Rla | Rl => a << 1 | self.flags.c,
            Rra | Rr => a >> 1 | self.flags.c << 7,
            Sla => a << 1,
            Sra => ((a as i8) >> 1) as u8,
            Srl => a >> 1,
            _ => unreachable!(),
        };

        match op {
            Rlca | Rlc | Rla | Rl | Sla => self.set_carry_and_zero(a >> 7, r),
            Rrca | Rrc | Rra | Rr | Sra | Srl => self.set_carry_and_zero(a & 1, r),
            _ => unreachable!(),
        }

        // The accumulator-only rotates always clear Z regardless of result.
        if matches!(op, Rla | Rlca | Rrca | Rra) {
            self.flags.z = 0;
        }

        r
    }

    /// Execute JR/JP/CALL/RET/RETI/RST, moving PC and reporting whether
    /// the branch's condition (if any) was satisfied.
    fn apply_branch(&mut self, op: Opcode, oa: Operand, a: u16, b: u16) -> bool {
        let taken = match oa {
            Operand::Cond(cc) => match cc {
                Cond::NC => self.flags.c == 0,
                Cond::NZ => self.flags.z == 0,
                Cond::C => self.flags.c == 1,
                Cond::Z => self.flags.z == 1,
            },
            _ => true,
        };

        if !taken {
            return false;
        }

        // Conditional branches carry their target in the second operand.
        let target = if matches!(oa, Operand::Cond(_)) { b } else { a };

        use Opcode::*;
        let dest = match op {
            Jr => self.pc.0.wrapping_add(target),
            Jp => target,
            Call => {
                self.push_u16(self.pc.0);
                target
            }
            Ret => self.pop_u16(),
            Reti => {
                self.ime = true;
                self.pop_u16()
            }
            Rst => {
                self.push_u16(self.pc.0);
                target
            }
            _ => unreachable!(),
        };

        self.pc.0 = dest;
        true
    }

    /// BCD-correct `A` after the last ADD/SUB, per the flags it left set.
    fn apply_daa_correction(&mut self) {
        let mut a = self.a;

        if self.flags.n == 0 {
            if self.flags.c == 1 || a > 0x99 {
                a = a.wrapping_add(0x60);
                self.flags.c = 1;
            }
            if self.flags.h == 1 || (a & 0x0f) > 0x09 {
                a = a.wrapping_add(0x6);
            }
        } else {
            if self.flags.c == 1 {
                a = a.wrapping_sub(0x60);
            }
            if self.flags.h == 1 {
                a = a.wrapping_sub(0x6);
            }
        }

        self.a = a;
        self.flags.z = is_zero(a as u16);
        self.flags.h = 0;
    }

    fn engage_double_speed(&mut self) {
        self.frequency = info::FREQUENCY_2X;
        self.mmu.is_2x = true;
        self.mmu.timer.is_2x = true;
        self.mmu.serial.is_2x = true;
        self.mmu.key1 = Key1 {
            armed: 0,
            speed: 1,
            ..Default::default()
        };
    }

    /// Set C to `carry`'s LSB, Z from `result`, and clear N/H.
    fn set_carry_and_zero(&mut self, carry: u8, result: u8) {
        self.flags.write(0);
        self.flags.c = carry & 1;
        self.flags.z = is_zero(result as u16);
    }
}

fn is_reg16(op: Operand) -> bool {
    matches!(
        op,
        Operand::Reg(Reg::BC | Reg::DE | Reg::HL | Reg::SP)
    )
}

// `Flags` is a `bit_fields!` struct so every field reads/writes as `u8`
// rather than `bool`; these helpers produce that representation directly.
fn is_carry_with_carry_in(a: u16, b: u16, carry: u16, bits: u32) -> u8 {
    if is_carry(a, b, bits) == 1 {
        1
    } else {
        is_carry(a.wrapping_add(b), carry, bits)
    }
}

fn is_borrow_with_carry_in(a: u16, b: u16, carry: u16, bits: u32) -> u8 {
    if is_borrow(a, b, bits) == 1 {
        1
    } else {
        is_borrow(a.wrapping_sub(b), carry, bits)
    }
}

#[inline]
fn is_carry(a: u16, b: u16, bits: u32) -> u8 {
    let mask = low_bits_mask(bits);
    let (a, b) = (a & mask, b & mask);
    (a.wrapping_add(b) & mask < a) as u8
}

#[inline]
fn is_borrow(a: u16, b: u16, bits: u32) -> u8 {
    let mask = low_bits_mask(bits);
    let (a, b) = (a & mask, b & mask);
    (b > a) as u8
}

#[inline]
fn is_zero(v: u16) -> u8 {
    (v == 0) as u8
}

/// `+1` for `[HL+]`, `-1` for `[HL-]`, `0` for every other operand.
#[inline]
fn hl_postfix_delta(op: Operand) -> i16 {
    match op {
        Operand::RegMem(Reg::HLinc) => 1,
        Operand::RegMem(Reg::HLdec) => -1,
        _ => 0,
    }
}

#[inline(always)]
const fn low_bits_mask(bits: u32) -> u16 {
    if bits == u16::BITS {
        !0
    } else {
        !(!0 << bits)
    }
}
