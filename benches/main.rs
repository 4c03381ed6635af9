#[macro_use]
extern crate criterion;

mod indexed_skiplist;

criterion_group!(benches, crate::indexed_skiplist::benchmark);
criterion_main!(benches);
