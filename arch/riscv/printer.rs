use core::fmt::{self, Write};

use alloc::{borrow::Cow, boxed::Box, format};

use asmprint_core::{
    imm::Imm,
    operand::{Operand, Reg, RegClass},
    printer::{ArchPrinter, PrinterExt},
    tables::{RegisterClass, Tables},
    Options, RegNames,
};

use super::{consts::*, TABLES};

#[rustfmt::skip]
const X_NAME: [&str; 32] = [
    "x0",  "x1",  "x2",  "x3",  "x4",  "x5",  "x6",  "x7",
    "x8",  "x9",  "x10", "x11", "x12", "x13", "x14", "x15",
    "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23",
    "x24", "x25", "x26", "x27", "x28", "x29", "x30", "x31",
];

#[rustfmt::skip]
const X_ABI_NAME: [&str; 32] = [
    "zero", "ra",   "sp",   "gp",   "tp",   "t0",   "t1",   "t2",
    "s0",   "s1",   "a0",   "a1",   "a2",   "a3",   "a4",   "a5",
    "a6",   "a7",   "s2",   "s3",   "s4",   "s5",   "s6",   "s7",
    "s8",   "s9",   "s10",  "s11",  "t3",   "t4",   "t5",   "t6",
];

#[rustfmt::skip]
const F_NAME: [&str; 32] = [
    "f0",  "f1",  "f2",  "f3",  "f4",  "f5",  "f6",  "f7",
    "f8",  "f9",  "f10", "f11", "f12", "f13", "f14", "f15",
    "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23",
    "f24", "f25", "f26", "f27", "f28", "f29", "f30", "f31",
];

#[rustfmt::skip]
const F_ABI_NAME: [&str; 32] = [
    "ft0",  "ft1", "ft2",  "ft3",   "ft4",  "ft5", "ft6",  "ft7",
    "fs0",  "fs1", "fa0",  "fa1",   "fa2",  "fa3", "fa4",  "fa5",
    "fa6",  "fa7", "fs2",  "fs3",   "fs4",  "fs5", "fs6",  "fs7",
    "fs8",  "fs9", "fs10", "fs11",  "ft8",  "ft9", "ft10", "ft11",
];

pub(crate) const REGISTERS: &[RegisterClass] = &[
    RegisterClass {
        class: RegClass::INT,
        numeric: &X_NAME,
        abi: &X_ABI_NAME,
    },
    RegisterClass {
        class: RegClass::FLOAT,
        numeric: &F_NAME,
        abi: &F_ABI_NAME,
    },
];

/// Sorted by number.
#[rustfmt::skip]
const CSR_NAME: &[(u16, &str)] = &[
    (0x001, "fflags"),    (0x002, "frm"),       (0x003, "fcsr"),
    (0x100, "sstatus"),   (0x104, "sie"),       (0x105, "stvec"),
    (0x140, "sscratch"),  (0x141, "sepc"),      (0x142, "scause"),
    (0x143, "stval"),     (0x144, "sip"),       (0x180, "satp"),
    (0x300, "mstatus"),   (0x301, "misa"),      (0x304, "mie"),
    (0x305, "mtvec"),     (0x340, "mscratch"),  (0x341, "mepc"),
    (0x342, "mcause"),    (0x343, "mtval"),     (0x344, "mip"),
    (0xc00, "cycle"),     (0xc01, "time"),      (0xc02, "instret"),
    (0xc80, "cycleh"),    (0xc81, "timeh"),     (0xc82, "instreth"),
    (0xf11, "mvendorid"), (0xf12, "marchid"),   (0xf13, "mimpid"),
    (0xf14, "mhartid"),
];

pub fn csr_name(number: u16) -> Option<&'static str> {
    CSR_NAME
        .binary_search_by_key(&number, |(i, _)| *i)
        .ok()
        .map(|i| CSR_NAME[i].1)
}

pub fn csr_by_name(name: &str) -> Option<u16> {
    CSR_NAME.iter().find(|(_, i)| *i == name).map(|(i, _)| *i)
}

fn rm_name(rm: i64) -> Option<&'static str> {
    let s = match u8::try_from(rm).ok()? {
        RM_RNE => "rne",
        RM_RTZ => "rtz",
        RM_RDN => "rdn",
        RM_RUP => "rup",
        RM_RMM => "rmm",
        RM_DYN => "dyn",
        _ => return None,
    };
    Some(s)
}

struct Printer;

impl<E: PrinterExt> ArchPrinter<E> for Printer {
    fn tables(&self) -> &'static Tables {
        &TABLES
    }

    fn register_name(&self, reg: Reg, names: RegNames) -> Cow<'static, str> {
        if reg.class() == reg_class::CSR {
            // unnamed CSRs are printed as numbers
            return match csr_name(reg.index()) {
                Some(name) => name.into(),
                None => {
                    let number = Imm::new(reg.index().into(), TABLES.hex_threshold);
                    format!("{number}").into()
                }
            };
        }
        match TABLES.register_name(reg, names) {
            Some(name) => name.into(),
            None => {
                debug!("riscv: no name for register {reg:?}");
                format!("{reg:?}").into()
            }
        }
    }

    fn print_custom(
        &self,
        out: &mut dyn Write,
        ext: &E,
        opts: &Options,
        id: u16,
        operand: &Operand,
    ) -> fmt::Result {
        match (id, operand) {
            (hook::RM, &Operand::Imm(rm)) => match rm_name(rm) {
                Some(name) => ext.print_flags(out, name),
                None => {
                    debug!("riscv: invalid rounding mode {rm}");
                    ext.print_immediate(out, Imm::new(rm, TABLES.hex_threshold))
                }
            },
            _ => self.print_operand_default(out, ext, opts, operand),
        }
    }
}

pub fn printer<E: PrinterExt>() -> Box<dyn ArchPrinter<E>> {
    Box::new(Printer)
}
