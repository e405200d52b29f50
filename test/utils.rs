use std::fmt::{self, Write as _};

/// Makes tabs and trailing spaces visible.
struct Visible<'a>(&'a str);

impl fmt::Display for Visible<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let end = self.0.trim_end().len();
        for (i, c) in self.0.char_indices() {
            match c {
                '\t' => fmt.write_char('→')?,
                ' ' if i >= end => fmt.write_char('•')?,
                _ => fmt.write_char(c)?,
            }
        }
        Ok(())
    }
}

pub struct Diff<'a> {
    file: &'a str,
    line: usize,
    input: &'a str,
    expect: &'a str,
    result: &'a str,
}

impl<'a> Diff<'a> {
    pub fn new(
        file: &'a str,
        line: usize,
        input: &'a str,
        expect: &'a str,
        result: &'a str,
    ) -> Self {
        Self {
            file,
            line,
            input,
            expect,
            result,
        }
    }
}

impl fmt::Display for Diff<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        use diff::Result as E;
        let w = 5;
        if !self.file.is_empty() {
            writeln!(out, "{:w$}--> {}", ' ', self.file)?;
        }
        if !self.input.is_empty() {
            writeln!(out, "{:>8}{}", "insn | ", Visible(self.input))?;
            writeln!(out, "{:7}{:-<24}", ' ', ' ')?;
        }
        let mut ln = std::cmp::max(self.line, 1);
        let mut ln2 = ln;
        for diff in diff::lines(self.expect, self.result) {
            match diff {
                E::Left(l) => {
                    writeln!(out, "{ln:w$} - {}↴", Visible(l))?;
                    ln += 1;
                }
                E::Both(l, _) => {
                    writeln!(out, "{ln:w$} | {}↴", Visible(l))?;
                    ln += 1;
                    ln2 = ln;
                }
                E::Right(r) => {
                    writeln!(out, "{ln2:w$} + {}↴", Visible(r))?;
                    ln2 += 1;
                }
            }
        }
        Ok(())
    }
}

pub fn check(file: &str, line: usize, left: &str, right: &str) -> Result<(), String> {
    if left != right {
        let err = "invalid result";
        eprintln!("error: {err}");
        eprintln!("{}", Diff::new(file, line, "", left, right));
        return Err(err.to_string());
    }
    Ok(())
}
