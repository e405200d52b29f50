use core::{ops::Deref, slice};

use alloc::vec::Vec;

use crate::{
    error::Error,
    operand::{Operand, Reg},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandType {
    Reg,
    Imm,
}

/// Printed operand as seen by programmatic consumers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailOperand {
    Reg(Reg),
    Imm(i64),
}

impl DetailOperand {
    pub fn from_operand(operand: &Operand) -> Option<Self> {
        match *operand {
            Operand::Reg(reg) => Some(Self::Reg(reg)),
            Operand::Imm(imm) => Some(Self::Imm(imm)),
            Operand::Unprinted => None,
        }
    }

    pub const fn kind(&self) -> OperandType {
        match self {
            Self::Reg(_) => OperandType::Reg,
            Self::Imm(_) => OperandType::Imm,
        }
    }
}

/// Operands of one printed instruction, in emission order.
///
/// The capacity is the architecture's maximum operand count. The printer
/// resets the record before every instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detail {
    capacity: usize,
    operands: Vec<DetailOperand>,
}

impl Detail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            operands: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.operands.clear();
    }

    pub fn as_slice(&self) -> &[DetailOperand] {
        &self.operands
    }

    pub fn try_push(&mut self, operand: DetailOperand) -> Result<(), Error> {
        if self.operands.len() >= self.capacity {
            return Err(Error::DetailOverflow {
                capacity: self.capacity,
            });
        }
        self.operands.push(operand);
        Ok(())
    }

    /// Append an operand.
    ///
    /// # Panics
    ///
    /// Panics if the record is full. A valid table bundle never declares more
    /// operands than the architecture's maximum.
    pub fn push(&mut self, operand: DetailOperand) {
        if let Err(err) = self.try_push(operand) {
            panic!("{err}");
        }
    }
}

impl Deref for Detail {
    type Target = [DetailOperand];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Detail {
    type Item = &'a DetailOperand;
    type IntoIter = slice::Iter<'a, DetailOperand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
