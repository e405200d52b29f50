use core::fmt::{self, Write};

use alloc::{borrow::Cow, format};

use crate::{
    alias,
    bitfield::BitFields,
    detail::{Detail, DetailOperand},
    imm::Imm,
    insn::Insn,
    operand::{Operand, Reg},
    tables::{Slot, Tables, Template},
    Options, RegNames,
};

pub struct FormatterFn<F>(pub F)
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result;

impl<F> fmt::Display for FormatterFn<F>
where
    F: Fn(&mut fmt::Formatter) -> fmt::Result,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.0(fmt)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Separator {
    Tab,
    Char(char),
    Str(&'static str),
    /// Pad the mnemonic to the given width, at least one space.
    Width(usize),
}

impl Separator {
    pub fn print(&self, out: &mut dyn Write, mnemonic_len: usize) -> fmt::Result {
        match self {
            Separator::Tab => out.write_char('\t'),
            Separator::Char(c) => out.write_char(*c),
            Separator::Str(s) => out.write_str(s),
            Separator::Width(w) => {
                let w = w - core::cmp::min(*w, mnemonic_len);
                write!(out, "{:w$}", ' ')
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Mnemonic,
    Register,
    Immediate,
    Flags,
    Literal,
}

/// Output customization, e.g. colors.
pub trait PrinterExt {
    fn print_styled(
        &self,
        out: &mut dyn Write,
        #[allow(unused_variables)] style: Style,
        display: impl fmt::Display,
    ) -> fmt::Result {
        write!(out, "{display}")
    }

    fn print_mnemonic(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Mnemonic, display)
    }

    fn print_register(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Register, display)
    }

    fn print_immediate(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Immediate, display)
    }

    fn print_flags(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Flags, display)
    }

    fn print_literal(&self, out: &mut dyn Write, display: impl fmt::Display) -> fmt::Result {
        self.print_styled(out, Style::Literal, display)
    }
}

impl PrinterExt for () {}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Last {
    Mnemonic,
    Operand,
    Text,
}

pub trait ArchPrinter<E: PrinterExt> {
    fn tables(&self) -> &'static Tables;

    fn register_name(&self, reg: Reg, names: RegNames) -> Cow<'static, str> {
        match self.tables().register_name(reg, names) {
            Some(name) => name.into(),
            None => {
                debug!("{}: no name for register {reg:?}", self.tables().name);
                format!("{reg:?}").into()
            }
        }
    }

    /// Print an operand of a [`Slot::Custom`] slot.
    fn print_custom(
        &self,
        out: &mut dyn Write,
        ext: &E,
        opts: &Options,
        hook: u16,
        operand: &Operand,
    ) -> fmt::Result {
        debug!("{}: unhandled print hook {hook}", self.tables().name);
        self.print_operand_default(out, ext, opts, operand)
    }

    fn print_operand_default(
        &self,
        out: &mut dyn Write,
        ext: &E,
        opts: &Options,
        operand: &Operand,
    ) -> fmt::Result {
        match *operand {
            Operand::Reg(reg) => ext.print_register(out, self.register_name(reg, opts.reg_names)),
            Operand::Imm(imm) => {
                ext.print_immediate(out, Imm::new(imm, self.tables().hex_threshold))
            }
            Operand::Unprinted => Ok(()),
        }
    }

    fn print_operand(
        &self,
        out: &mut dyn Write,
        ext: &E,
        opts: &Options,
        slot: Slot,
        operand: &Operand,
    ) -> fmt::Result {
        match (slot, operand) {
            (Slot::BitField(fields), &Operand::Imm(imm)) => {
                ext.print_flags(out, BitFields::new(imm as u64, fields))
            }
            (Slot::Custom(hook), _) => self.print_custom(out, ext, opts, hook, operand),
            _ => self.print_operand_default(out, ext, opts, operand),
        }
    }

    /// Print `insn` as a single line.
    ///
    /// Every printed register and immediate is appended to `detail`, which is
    /// cleared first. A slot without an operand prints nothing, and so does a
    /// bit-field with no field set.
    fn print_insn(
        &self,
        out: &mut dyn Write,
        ext: &E,
        opts: &Options,
        insn: &Insn,
        mut detail: Option<&mut Detail>,
    ) -> fmt::Result {
        let tables = self.tables();

        if let Some(detail) = detail.as_deref_mut() {
            detail.clear();
        }

        let alias = if opts.alias {
            alias::find(tables.aliases, insn)
        } else {
            None
        };

        let (template, operands) = match alias {
            Some(ref alias) => (alias.template(), alias.operands()),
            None => {
                let template = tables.template(insn.opcode()).unwrap_or_else(|| {
                    debug!("{}: unknown opcode {}", tables.name, insn.opcode().0);
                    &Template::INVALID
                });
                (template, insn.operands())
            }
        };

        ext.print_mnemonic(out, template.mnemonic)?;

        let mnemonic_len = template.mnemonic.len();
        let mut last = Last::Mnemonic;
        let mut operands = operands.iter();
        for slot in template.slots {
            if let Slot::Text(text) = *slot {
                if last == Last::Mnemonic {
                    tables.insn_separator.print(out, mnemonic_len)?;
                }
                ext.print_literal(out, text)?;
                last = Last::Text;
                continue;
            }

            let operand = match operands.next() {
                Some(operand) => operand,
                None => {
                    debug!(
                        "{}: no operand for {slot:?} of `{}`",
                        tables.name, template.mnemonic
                    );
                    continue;
                }
            };

            let recorded = match DetailOperand::from_operand(operand) {
                Some(recorded) => recorded,
                None => continue,
            };
            if let (Slot::BitField(fields), &Operand::Imm(imm)) = (*slot, operand) {
                if BitFields::new(imm as u64, fields).is_empty() {
                    continue;
                }
            }

            match last {
                Last::Mnemonic => tables.insn_separator.print(out, mnemonic_len)?,
                Last::Operand => tables.operand_separator.print(out, 0)?,
                Last::Text => {}
            }
            self.print_operand(out, ext, opts, *slot, operand)?;
            if let Some(detail) = detail.as_deref_mut() {
                detail.push(recorded);
            }
            last = Last::Operand;
        }

        Ok(())
    }
}
