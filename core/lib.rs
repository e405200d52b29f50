#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
extern crate log;

pub mod alias;
pub mod bitfield;
pub mod detail;
pub mod error;
pub mod imm;
pub mod insn;
pub mod macros;
pub mod operand;
pub mod printer;
pub mod tables;

use crate::error::Error;

/// Register naming convention.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RegNames {
    /// ABI names, e.g. `sp`, `a0`.
    #[default]
    Abi,
    /// Raw numeric names, e.g. `x2`, `x10`.
    Numeric,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub alias: bool,
    pub reg_names: RegNames,
    pub detail: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alias: true,
            reg_names: RegNames::Abi,
            detail: false,
        }
    }
}

impl Options {
    /// Apply one objdump-style option, e.g. `no-aliases` or `numeric`.
    pub fn set(&mut self, option: &str) -> Result<(), Error> {
        match option {
            "aliases" => self.alias = true,
            "no-aliases" => self.alias = false,
            "abi" => self.reg_names = RegNames::Abi,
            "numeric" => self.reg_names = RegNames::Numeric,
            "detail" => self.detail = true,
            "no-detail" => self.detail = false,
            _ => return Err(Error::UnknownOption(option.into())),
        }
        Ok(())
    }

    /// Parse a comma separated option list on top of the defaults.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let mut opts = Self::default();
        for i in s.split(',').map(|i| i.trim()).filter(|i| !i.is_empty()) {
            opts.set(i)?;
        }
        Ok(opts)
    }
}
