use asmprint_core::{
    detail::{Detail, DetailOperand},
    insn::{Insn, Opcode},
    operand::{Reg, RegClass},
    printer::{ArchPrinter, Separator},
    tables::{RegisterClass, Slot, Tables, Template},
    Options, RegNames,
};
use asmprint_test::test::{self, Parser, Runner, Test};

const R1: Reg = Reg::new(RegClass::INT, 1);
const R2: Reg = Reg::new(RegClass::INT, 2);

const TEMPLATES: &[Template] = &[
    Template::INVALID,
    Template {
        mnemonic: "add",
        slots: &[Slot::Operand, Slot::Operand, Slot::Operand],
    },
    Template {
        mnemonic: "halt",
        slots: &[],
    },
    Template {
        mnemonic: "pad",
        slots: &[Slot::Text(" ")],
    },
];

static TOY: Tables = Tables {
    name: "toy",
    templates: TEMPLATES,
    aliases: &[],
    registers: &[RegisterClass {
        class: RegClass::INT,
        numeric: &["r0", "r1", "r2"],
        abi: &["zero", "one", "two"],
    }],
    hex_threshold: 9,
    max_operands: 3,
    insn_separator: Separator::Char(' '),
    operand_separator: Separator::Str(", "),
};

struct ToyPrinter;

impl ArchPrinter<()> for ToyPrinter {
    fn tables(&self) -> &'static Tables {
        &TOY
    }
}

struct Toy;

impl Runner for Toy {
    fn tables(&self) -> &'static Tables {
        &TOY
    }

    fn printer(&self) -> Box<dyn ArchPrinter<()>> {
        Box::new(ToyPrinter)
    }
}

#[test]
fn parse_flags() {
    let src = " +a\t+b  -abc-foo -foo  +bar+foo";
    let mut flags = test::parse_flags(src);
    assert_eq!(flags.next(), Some(("a", true)));
    assert_eq!(flags.next(), Some(("b", true)));
    assert_eq!(flags.next(), Some(("abc-foo", false)));
    assert_eq!(flags.next(), Some(("foo", false)));
    assert_eq!(flags.next(), Some(("bar+foo", true)));
    assert_eq!(flags.next(), None);
}

#[test]
fn apply_flags() {
    let mut opts = Options::default();
    test::apply_flags(&mut opts, "note -alias +numeric").unwrap();
    assert!(!opts.alias);
    assert_eq!(opts.reg_names, RegNames::Numeric);
    assert!(test::apply_flags(&mut opts, "+intel").is_err());
}

#[test]
fn parse() -> Result<(), String> {
    let src = r#"# comment
        add r1, r2, 5     | add one, two, 5

        halt              | halt    # +alias
          add one,two,-0x10|add one, two, -0x10
    "#;

    let mut parser = Parser::new("input", src);
    let mut test = Test::default();

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 2);
    assert_eq!(test.input, "add r1, r2, 5");
    assert_eq!(test.expect, "add one, two, 5");
    assert_eq!(test.comment, "");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 4);
    assert_eq!(test.input, "halt");
    assert_eq!(test.comment, "+alias");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 5);
    assert_eq!(test.input, "add one,two,-0x10");
    assert_eq!(test.expect, "add one, two, -0x10");

    assert!(!parser.parse(&mut test)?);
    Ok(())
}

#[test]
fn parse_error() {
    let mut parser = Parser::new("input", "\nadd r1, r2, r0\n");
    let err = parser.parse(&mut Test::default()).unwrap_err();
    assert_eq!(err, "error: no expected output in \"add r1, r2, r0\", input:2");
}

#[test]
fn parse_int() {
    assert_eq!(test::parse_int("0"), Some(0));
    assert_eq!(test::parse_int("-12"), Some(-12));
    assert_eq!(test::parse_int("0x7ff"), Some(0x7ff));
    assert_eq!(test::parse_int("-0x8000000000000000"), Some(i64::MIN));
    assert_eq!(test::parse_int("r1"), None);
}

#[test]
fn parse_insn() {
    let by_name = |name: &str| TOY.register_by_name(name);
    let insn = test::parse_insn(&TOY, by_name, "add one, r2, -3").unwrap();
    assert_eq!(insn, Insn::new(Opcode(1)).reg(R1).reg(R2).imm(-3));

    let insn = test::parse_insn(&TOY, by_name, "add one, _, 1").unwrap();
    assert_eq!(insn.operands().len(), 3);
    assert!(!insn.operands()[1].is_printable());

    assert_eq!(test::parse_insn(&TOY, by_name, "halt").unwrap(), Insn::new(Opcode(2)));
    assert!(test::parse_insn(&TOY, by_name, "sub r1, r1, r1").is_err());
    assert!(test::parse_insn(&TOY, by_name, "add r1, r9, r1").is_err());
}

#[test]
fn parse_all() {
    let src = "add r1, r1, 1 | add one, one, 1\nhalt | halt\n";
    let by_name = |name: &str| TOY.register_by_name(name);
    let insns = Parser::parse_all(&TOY, by_name, src).unwrap();
    assert_eq!(insns.len(), 2);
    assert_eq!(insns[1].opcode(), Opcode(2));
}

#[test]
fn run() {
    let src = r#"
        add r1, r2, 9       | add one, two, 9
        add r1, r2, 10      | add one, two, 0xa
        add r1, r2, 10      | add r1, r2, 0xa       # +numeric
        add r1, _, r2       | add one, two
        halt                | halt
    "#;
    assert_eq!(Toy.run("toy.test", src), Ok(()));
}

#[test]
fn run_reports_failures() {
    let src = r#"
        add r1, r2, 1       | add one, two, 2
        halt                | halt
        add r1, r2, 1       | add r1, r2, 1
        pad                 | pad
    "#;
    assert_eq!(Toy.run("toy.test", src), Err("failed 3 tests".to_string()));
}

fn detail(operands: &[DetailOperand]) -> Detail {
    let mut detail = Detail::new(TOY.max_operands);
    for operand in operands {
        detail.push(*operand);
    }
    detail
}

#[test]
fn check_detail() {
    let opts = Options::default();
    let insn = Insn::new(Opcode(1)).reg(R1).reg(R2).imm(10);
    let text = "add one, two, 0xa";
    let check = |operands: &[DetailOperand]| {
        test::check_detail(&ToyPrinter, &opts, &insn, text, &detail(operands))
    };

    let full = [
        DetailOperand::Reg(R1),
        DetailOperand::Reg(R2),
        DetailOperand::Imm(10),
    ];
    assert_eq!(check(&full), Ok(()));
    assert!(check(&full[..2]).is_err());
    assert!(check(&[full[1], full[0], full[2]]).is_err());
    assert!(check(&[full[0], full[1], DetailOperand::Imm(9)]).is_err());

    let insn = Insn::new(Opcode(1)).reg(R1).reg(R2);
    let extra = test::check_detail(&ToyPrinter, &opts, &insn, "add one, two", &detail(&full));
    assert!(extra.is_err());

    let mut insn = Insn::new(Opcode(1)).reg(R1);
    insn.push_unprinted();
    insn.push_reg(R2);
    let recorded = detail(&full[..2]);
    let skipped = test::check_detail(&ToyPrinter, &opts, &insn, "add one, two", &recorded);
    assert_eq!(skipped, Ok(()));
}
