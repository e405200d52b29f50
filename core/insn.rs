use alloc::vec::Vec;

use crate::operand::{Operand, Reg};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Opcode(pub u32);

impl Opcode {
    pub const INVALID: Self = Self(0);

    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Decoded instruction: opcode and operands in template order.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Insn {
    opcode: Opcode,
    operands: Vec<Operand>,
}

impl Insn {
    pub fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            operands: Vec::new(),
        }
    }

    pub fn with_operands<I>(opcode: Opcode, operands: I) -> Self
    where
        I: IntoIterator<Item = Operand>,
    {
        Self {
            opcode,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.opcode = Opcode::INVALID;
        self.operands.clear();
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.opcode = opcode;
    }

    pub fn operands(&self) -> &[Operand] {
        self.operands.as_slice()
    }

    pub fn push_operand<T>(&mut self, operand: T)
    where
        T: Into<Operand>,
    {
        self.operands.push(operand.into());
    }

    pub fn push_reg(&mut self, reg: Reg) {
        self.push_operand(Operand::Reg(reg));
    }

    pub fn push_imm(&mut self, value: i64) {
        self.push_operand(Operand::Imm(value));
    }

    pub fn push_unprinted(&mut self) {
        self.push_operand(Operand::Unprinted);
    }

    pub fn reg(mut self, reg: Reg) -> Self {
        self.push_reg(reg);
        self
    }

    pub fn imm(mut self, value: i64) -> Self {
        self.push_imm(value);
        self
    }
}
