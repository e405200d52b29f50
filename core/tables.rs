//! Static per-architecture table bundle.

use crate::{
    alias::{self, AliasRule},
    bitfield::BitField,
    error::Error,
    insn::Opcode,
    operand::{Reg, RegClass},
    printer::Separator,
    RegNames,
};

/// How one token of the instruction text is produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Literal text, glued to the previous token.
    Text(&'static str),
    /// Next operand, printed according to its kind.
    Operand,
    /// Next operand, an immediate made of named flags.
    BitField(&'static [BitField]),
    /// Next operand, printed by an architecture hook.
    Custom(u16),
}

impl Slot {
    pub const fn is_operand(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub mnemonic: &'static str,
    pub slots: &'static [Slot],
}

impl Template {
    pub const INVALID: Self = Self {
        mnemonic: "<invalid>",
        slots: &[],
    };

    /// Number of operands the template consumes.
    pub fn operand_count(&self) -> usize {
        self.slots.iter().filter(|i| i.is_operand()).count()
    }
}

/// Register names of one class, indexed by register index.
///
/// An empty `abi` slice means the class has no ABI names.
#[derive(Copy, Clone, Debug)]
pub struct RegisterClass {
    pub class: RegClass,
    pub numeric: &'static [&'static str],
    pub abi: &'static [&'static str],
}

impl RegisterClass {
    pub fn name(&self, index: u16, names: RegNames) -> Option<&'static str> {
        let index = index as usize;
        match names {
            RegNames::Abi if !self.abi.is_empty() => self.abi.get(index).copied(),
            _ => self.numeric.get(index).copied(),
        }
    }

    fn index_of(&self, name: &str) -> Option<u16> {
        self.numeric
            .iter()
            .position(|i| *i == name)
            .or_else(|| self.abi.iter().position(|i| *i == name))
            .map(|i| i as u16)
    }
}

pub struct Tables {
    pub name: &'static str,
    /// Indexed by opcode, entry zero is reserved for `Opcode::INVALID`.
    pub templates: &'static [Template],
    /// In priority order, first match wins.
    pub aliases: &'static [AliasRule],
    pub registers: &'static [RegisterClass],
    pub hex_threshold: u64,
    pub max_operands: usize,
    pub insn_separator: Separator,
    pub operand_separator: Separator,
}

impl Tables {
    pub fn template(&self, opcode: Opcode) -> Option<&'static Template> {
        if opcode == Opcode::INVALID {
            return None;
        }
        self.templates.get(opcode.index())
    }

    pub fn opcodes(&self) -> impl Iterator<Item = (Opcode, &'static Template)> {
        self.templates
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, template)| (Opcode(i as u32), template))
    }

    pub fn opcode_by_mnemonic(&self, mnemonic: &str) -> Option<Opcode> {
        self.opcodes()
            .find(|(_, template)| template.mnemonic == mnemonic)
            .map(|(opcode, _)| opcode)
    }

    pub fn register_name(&self, reg: Reg, names: RegNames) -> Option<&'static str> {
        self.registers
            .iter()
            .find(|i| i.class == reg.class())?
            .name(reg.index(), names)
    }

    /// Look up a register by numeric or ABI name.
    pub fn register_by_name(&self, name: &str) -> Option<Reg> {
        self.registers
            .iter()
            .find_map(|i| i.index_of(name).map(|index| Reg::new(i.class, index)))
    }

    /// Check the bundle for inconsistencies the printer relies on.
    pub fn validate(&self) -> Result<(), Error> {
        for (opcode, template) in self.opcodes() {
            let count = template.operand_count();
            if count > self.max_operands {
                return Err(Error::TooManyOperands {
                    opcode,
                    count,
                    max: self.max_operands,
                });
            }
        }

        for (i, rule) in self.aliases.iter().enumerate() {
            let canonical = self
                .template(rule.opcode)
                .ok_or(Error::UnknownOpcode(rule.opcode))?;
            let count = canonical.operand_count();
            let in_range = |index: u8| (index as usize) < count;
            if !rule.remap.iter().all(|&index| in_range(index))
                || !rule.conds.iter().all(|cond| in_range(cond.max_index()))
                || rule.template.operand_count() != rule.remap.len()
            {
                return Err(Error::AliasArity { rule: i });
            }
        }

        if let Some((rule, by)) = alias::shadowed(self.aliases) {
            return Err(Error::ShadowedAlias { rule, by });
        }

        Ok(())
    }
}
