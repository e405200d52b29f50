#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arch;

mod printer;

use core::{fmt, str::FromStr};

pub use asmprint_core::{
    alias::{Alias, AliasRule, Cond},
    bitfield::{format_bit_field, BitField},
    detail::{Detail, DetailOperand, OperandType},
    error::Error,
    imm::{format_imm, Imm},
    insn::{Insn, Opcode},
    operand::{Operand, Reg, RegClass},
    tables::{Slot, Tables, Template},
    Options, RegNames,
};

pub use crate::printer::{ArchPrinter, FormatterFn, Output, Printer, PrinterExt, Style};

#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arch {
    #[cfg(feature = "riscv")]
    Riscv,
}

impl Arch {
    /// Architectures enabled at build time.
    pub const ALL: &'static [Arch] = &[
        #[cfg(feature = "riscv")]
        Arch::Riscv,
    ];

    pub fn tables(&self) -> &'static Tables {
        match *self {
            #[cfg(feature = "riscv")]
            Arch::Riscv => &arch::riscv::TABLES,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tables().name
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

impl FromStr for Arch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|i| i.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownArch(s.into()))
    }
}
