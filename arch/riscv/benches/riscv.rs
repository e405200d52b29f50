use asmprint_core::{detail::Detail, Options};
use asmprint_test::test::Parser;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SOURCES: &[(&str, &str)] = &[
    (
        "base",
        concat!(
            include_str!("../tests/rv32i.test"),
            include_str!("../tests/rv64i.test"),
            include_str!("../tests/rvm.test"),
            include_str!("../tests/rva.test"),
        ),
    ),
    (
        "float",
        concat!(
            include_str!("../tests/rvf.test"),
            include_str!("../tests/rvd.test"),
        ),
    ),
    ("zicsr", include_str!("../tests/zicsr.test")),
    ("alias", include_str!("../tests/alias.test")),
];

fn bench_impl<const DETAIL: bool>(c: &mut Criterion, name: &str, alias: bool) {
    let mut group = c.benchmark_group(name);
    for (name, source) in SOURCES {
        let insns =
            Parser::parse_all(&asmprint_riscv::TABLES, asmprint_riscv::reg_by_name, source)
                .unwrap();

        let opts = Options {
            alias,
            ..Default::default()
        };
        let printer = asmprint_riscv::printer::<()>();
        let mut buffer = String::with_capacity(64);
        let mut detail = Detail::new(asmprint_riscv::TABLES.max_operands);

        group.throughput(Throughput::Elements(insns.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &insns, |b, insns| {
            b.iter(|| {
                let mut len = 0;
                for insn in insns {
                    buffer.clear();
                    let detail = if DETAIL { Some(&mut detail) } else { None };
                    printer
                        .print_insn(&mut buffer, &(), &opts, insn, detail)
                        .unwrap();
                    len += buffer.len();
                }
                len
            })
        });
    }
}

fn riscv_bench(c: &mut Criterion) {
    bench_impl::<false>(c, "print", false);
    bench_impl::<false>(c, "print_alias", true);
    bench_impl::<true>(c, "print_detail", true);
}

criterion_group!(benches, riscv_bench);
criterion_main!(benches);
