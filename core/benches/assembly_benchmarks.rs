use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheet_assembly::{DataFile, Destination, assemble_table, group_by_serial};

const SHEETS_PER_SERIAL: usize = 8;

fn make_files(n_serials: usize) -> Vec<DataFile> {
    let mut files = Vec::with_capacity(n_serials * SHEETS_PER_SERIAL);
    for serial in 0..n_serials {
        for sheet in 0..SHEETS_PER_SERIAL {
            let path = format!(r"C:\data\{:012}_sheet{}_raw.txt", serial, sheet);
            files.push(DataFile::text_data(&path).expect("generated name is valid"));
        }
    }
    files
}

fn make_destinations() -> Vec<Destination> {
    (0..SHEETS_PER_SERIAL)
        .map(|sheet| Destination::new(format!("sheet{}_raw", sheet)))
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    for n_serials in [10, 100, 500] {
        let files = make_files(n_serials);
        group.throughput(Throughput::Elements(files.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_serials),
            &files,
            |b, files| {
                b.iter(|| group_by_serial(files.clone()).expect("all files carry serials"));
            },
        );
    }
    group.finish();
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    for n_serials in [10, 100, 500] {
        let files = make_files(n_serials);
        let groups = group_by_serial(files).expect("all files carry serials");
        let destinations = make_destinations();
        group.throughput(Throughput::Elements((n_serials * SHEETS_PER_SERIAL) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_serials),
            &groups,
            |b, groups| {
                b.iter(|| {
                    assemble_table(groups, &destinations, "_raw").expect("unique headers")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_grouping, bench_assembly);
criterion_main!(benches);
