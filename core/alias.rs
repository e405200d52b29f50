//! Alias selection.
//!
//! Rules are kept in one list per architecture. The list order is the
//! priority order: the first rule whose opcode and conditions match is used,
//! so more specific rules must come before more general ones for the same
//! opcode (see [`shadowed`]).

use alloc::vec::Vec;

use crate::{
    insn::{Insn, Opcode},
    operand::{Operand, Reg},
    tables::Template,
};

/// Condition on the operands of the canonical instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cond {
    /// Operand is this register.
    Reg(u8, Reg),
    /// Operand is an immediate with this value.
    Imm(u8, i64),
    /// Two operands are equal.
    Same(u8, u8),
}

impl Cond {
    pub fn test(&self, operands: &[Operand]) -> bool {
        let get = |index: u8| operands.get(index as usize);
        match *self {
            Self::Reg(i, reg) => get(i) == Some(&Operand::Reg(reg)),
            Self::Imm(i, imm) => get(i) == Some(&Operand::Imm(imm)),
            Self::Same(a, b) => match (get(a), get(b)) {
                (Some(a), Some(b)) => a.is_printable() && a == b,
                _ => false,
            },
        }
    }

    pub(crate) fn max_index(&self) -> u8 {
        match *self {
            Self::Reg(i, _) | Self::Imm(i, _) => i,
            Self::Same(a, b) => a.max(b),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AliasRule {
    pub opcode: Opcode,
    pub conds: &'static [Cond],
    pub template: Template,
    /// Operand indices of the canonical instruction, in alias template order.
    pub remap: &'static [u8],
}

impl AliasRule {
    pub fn matches(&self, insn: &Insn) -> bool {
        let operands = insn.operands();
        self.opcode == insn.opcode()
            && self.remap.iter().all(|&i| (i as usize) < operands.len())
            && self.conds.iter().all(|cond| cond.test(operands))
    }

    pub fn remap(&self, operands: &[Operand]) -> Vec<Operand> {
        self.remap
            .iter()
            .filter_map(|&i| operands.get(i as usize))
            .copied()
            .collect()
    }

    /// Every instruction this rule matches is also matched by `other`.
    fn is_covered_by(&self, other: &AliasRule) -> bool {
        self.opcode == other.opcode && other.conds.iter().all(|c| self.conds.contains(c))
    }
}

/// Selected alias with its operands in alias template order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    index: usize,
    rule: &'static AliasRule,
    operands: Vec<Operand>,
}

impl Alias {
    /// Position of the rule in the priority list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn rule(&self) -> &'static AliasRule {
        self.rule
    }

    pub fn template(&self) -> &'static Template {
        &self.rule.template
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}

pub fn find(rules: &'static [AliasRule], insn: &Insn) -> Option<Alias> {
    let (index, rule) = rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(insn))?;
    trace!(
        "alias #{index} `{}` for opcode {}",
        rule.template.mnemonic,
        insn.opcode().0
    );
    Some(Alias {
        index,
        rule,
        operands: rule.remap(insn.operands()),
    })
}

/// Find a rule that can never be selected because an earlier rule for the
/// same opcode matches everything it matches.
///
/// Returns `(rule, by)` indices.
pub fn shadowed(rules: &[AliasRule]) -> Option<(usize, usize)> {
    rules.iter().enumerate().find_map(|(i, rule)| {
        rules[..i]
            .iter()
            .position(|prev| rule.is_covered_by(prev))
            .map(|by| (i, by))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{operand::RegClass, tables::Slot};

    const ADD: Opcode = Opcode(1);
    const SUB: Opcode = Opcode(2);
    const R0: Reg = Reg::new(RegClass::INT, 0);
    const R1: Reg = Reg::new(RegClass::INT, 1);

    const fn template(mnemonic: &'static str, slots: &'static [Slot]) -> Template {
        Template { mnemonic, slots }
    }

    static RULES: &[AliasRule] = &[
        AliasRule {
            opcode: ADD,
            conds: &[Cond::Reg(0, R0), Cond::Imm(2, 0)],
            template: template("nop", &[]),
            remap: &[],
        },
        AliasRule {
            opcode: ADD,
            conds: &[Cond::Imm(2, 0)],
            template: template("mov", &[Slot::Operand, Slot::Operand]),
            remap: &[0, 1],
        },
        AliasRule {
            opcode: SUB,
            conds: &[Cond::Same(1, 2)],
            template: template("clr", &[Slot::Operand]),
            remap: &[0],
        },
    ];

    #[test]
    fn first_match_wins() {
        let insn = Insn::new(ADD).reg(R0).reg(R1).imm(0);
        let alias = find(RULES, &insn).unwrap();
        assert_eq!(alias.index(), 0);
        assert_eq!(alias.template().mnemonic, "nop");
        assert!(alias.operands().is_empty());

        let insn = Insn::new(ADD).reg(R1).reg(R0).imm(0);
        let alias = find(RULES, &insn).unwrap();
        assert_eq!(alias.index(), 1);
        assert_eq!(alias.operands(), &[Operand::Reg(R1), Operand::Reg(R0)]);
    }

    #[test]
    fn no_match() {
        let insn = Insn::new(ADD).reg(R1).reg(R0).imm(4);
        assert_eq!(find(RULES, &insn), None);
        let insn = Insn::new(SUB).reg(R1).reg(R0).reg(R1);
        assert_eq!(find(RULES, &insn), None);
        assert_eq!(find(RULES, &Insn::new(Opcode(3))), None);
    }

    #[test]
    fn missing_operands_never_match() {
        let insn = Insn::new(ADD).reg(R1);
        assert_eq!(find(RULES, &insn), None);
        let insn = Insn::new(SUB).reg(R1);
        assert_eq!(find(RULES, &insn), None);
    }

    #[test]
    fn same_operands() {
        let insn = Insn::new(SUB).reg(R1).reg(R0).reg(R0);
        let alias = find(RULES, &insn).unwrap();
        assert_eq!(alias.template().mnemonic, "clr");
        assert_eq!(alias.operands(), &[Operand::Reg(R1)]);

        let mut insn = Insn::new(SUB).reg(R1);
        insn.push_unprinted();
        insn.push_unprinted();
        assert_eq!(find(RULES, &insn), None);
    }

    #[test]
    fn deterministic() {
        let insn = Insn::new(ADD).reg(R1).reg(R0).imm(0);
        assert_eq!(find(RULES, &insn), find(RULES, &insn));
    }

    #[test]
    fn shadowing() {
        assert_eq!(shadowed(RULES), None);

        static BAD: &[AliasRule] = &[
            AliasRule {
                opcode: ADD,
                conds: &[Cond::Imm(2, 0)],
                template: template("mov", &[Slot::Operand, Slot::Operand]),
                remap: &[0, 1],
            },
            AliasRule {
                opcode: ADD,
                conds: &[Cond::Reg(0, R0), Cond::Imm(2, 0)],
                template: template("nop", &[]),
                remap: &[],
            },
        ];
        assert_eq!(shadowed(BAD), Some((1, 0)));
    }
}
