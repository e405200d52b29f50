use core::fmt::{self, Write};

use alloc::{boxed::Box, string::String};

use crate::{Arch, Detail, Insn, Options, Tables};

pub use asmprint_core::printer::{ArchPrinter, FormatterFn, PrinterExt, Style};

/// Text and detail record of one instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    pub text: String,
    /// Present if [`Options::detail`] is set.
    pub detail: Option<Detail>,
}

pub struct Printer<E: PrinterExt = ()> {
    arch: Arch,
    opts: Options,
    printer: Box<dyn ArchPrinter<E>>,
    ext: E,
}

impl Printer {
    pub fn new(arch: Arch, opts: Options) -> Self {
        Self::with_ext(arch, opts, ())
    }
}

impl<E: PrinterExt> Printer<E> {
    pub fn with_ext(arch: Arch, opts: Options, ext: E) -> Self {
        use crate::arch::*;

        let printer = match arch {
            #[cfg(feature = "riscv")]
            Arch::Riscv => riscv::printer(),
        };

        Self {
            arch,
            opts,
            printer,
            ext,
        }
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    pub fn tables(&self) -> &'static Tables {
        self.printer.tables()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.opts
    }

    /// Append the text of `insn` to `out`.
    ///
    /// `detail` is filled only if [`Options::detail`] is set.
    pub fn print_to(
        &self,
        out: &mut dyn Write,
        insn: &Insn,
        detail: Option<&mut Detail>,
    ) -> fmt::Result {
        let detail = if self.opts.detail { detail } else { None };
        self.printer
            .print_insn(out, &self.ext, &self.opts, insn, detail)
    }

    pub fn print(&self, insn: &Insn) -> Result<Output, fmt::Error> {
        let mut text = String::new();
        let mut detail = if self.opts.detail {
            Some(Detail::new(self.tables().max_operands))
        } else {
            None
        };
        self.print_to(&mut text, insn, detail.as_mut())?;
        Ok(Output { text, detail })
    }

    pub fn display<'a>(&'a self, insn: &'a Insn) -> impl fmt::Display + 'a {
        FormatterFn(move |fmt| {
            self.printer
                .print_insn(fmt, &self.ext, &self.opts, insn, None)
        })
    }
}
