#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
extern crate log;

mod alias;
mod consts;
mod printer;

pub mod opcode;

use asmprint_core::{
    operand::{Reg, RegClass},
    printer::Separator,
    tables::Tables,
};

pub use self::consts::*;
pub use self::printer::{csr_by_name, csr_name, printer};

pub const ZERO: Reg = x(0);
pub const RA: Reg = x(1);
pub const SP: Reg = x(2);

pub const fn x(index: u16) -> Reg {
    Reg::new(RegClass::INT, index)
}

pub const fn f(index: u16) -> Reg {
    Reg::new(RegClass::FLOAT, index)
}

pub const fn csr(number: u16) -> Reg {
    Reg::new(reg_class::CSR, number)
}

pub static TABLES: Tables = Tables {
    name: "riscv",
    templates: opcode::TEMPLATES,
    aliases: alias::ALIASES,
    registers: printer::REGISTERS,
    hex_threshold: 9,
    max_operands: 8,
    insn_separator: Separator::Char(' '),
    operand_separator: Separator::Str(", "),
};

/// Look up a register or a named CSR.
pub fn reg_by_name(name: &str) -> Option<Reg> {
    TABLES
        .register_by_name(name)
        .or_else(|| csr_by_name(name).map(csr))
}
