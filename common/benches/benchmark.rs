extern crate criterion;

use self::criterion::*;
use common::count_simple;
use common::PriorityQueue;

fn get_test_data(len: usize) -> Vec<u8> {
    // skewed distribution, lower bytes are more frequent
    (0..len).map(|i| ((i * 7919) % 251 % (1 + i % 61)) as u8).collect()
}

fn count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    for len in [1_000, 34_000, 65_000].iter() {
        let input = get_test_data(*len);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("count_simple", input.len()),
            &input,
            |b, i| {
                b.iter(|| count_simple(i));
            },
        );
    }
    group.finish();
}

fn heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");
    for len in [256_usize, 4096].iter() {
        let values: Vec<u64> = (0..*len as u64).map(|i| (i * 2_654_435_761) % 10_007).collect();
        group.bench_with_input(
            BenchmarkId::new("insert_extract_min", len),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap = PriorityQueue::new_min(values.len(), |a: &u64, b: &u64| a.cmp(b));
                    for value in values {
                        heap.insert(*value).unwrap();
                    }
                    let mut sum = 0;
                    while let Some(value) = heap.extract() {
                        sum += value;
                    }
                    sum
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, count, heap);
criterion_main!(benches);
