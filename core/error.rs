use core::fmt;

use alloc::string::String;

use crate::insn::Opcode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Unsupported printer option.
    UnknownOption(String),
    /// Unsupported or disabled architecture.
    UnknownArch(String),
    /// Detail record is full.
    DetailOverflow { capacity: usize },
    /// Opcode has no template in the table bundle.
    UnknownOpcode(Opcode),
    /// Template consumes more operands than the architecture allows.
    TooManyOperands {
        opcode: Opcode,
        count: usize,
        max: usize,
    },
    /// Alias rule refers to operands its canonical form does not have.
    AliasArity { rule: usize },
    /// Alias rule can never match because an earlier rule covers it.
    ShadowedAlias { rule: usize, by: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownOption(option) => write!(fmt, "unknown option `{option}`"),
            Self::UnknownArch(arch) => write!(fmt, "unknown architecture `{arch}`"),
            Self::DetailOverflow { capacity } => {
                write!(fmt, "detail record overflow, capacity is {capacity}")
            }
            Self::UnknownOpcode(opcode) => write!(fmt, "unknown opcode {}", opcode.0),
            Self::TooManyOperands { opcode, count, max } => write!(
                fmt,
                "opcode {} has {count} operands, maximum is {max}",
                opcode.0
            ),
            Self::AliasArity { rule } => {
                write!(fmt, "alias rule #{rule} refers to missing operands")
            }
            Self::ShadowedAlias { rule, by } => {
                write!(fmt, "alias rule #{rule} is shadowed by rule #{by}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
