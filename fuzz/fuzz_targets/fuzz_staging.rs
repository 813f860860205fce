#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stagebuf::{BufferOptions, GrowthPolicy, Relocation, StagingBuffer};

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    Consume(u16),
    Drain,
    Reserve(u16),
    Commit { n: u16, fill: u8 },
    Shrink(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    factor: Option<u8>,
    ops: Vec<Op>,
}

fn run(input: Input) {
    let growth = input.factor.map_or(GrowthPolicy::Doubling, GrowthPolicy::Factor);
    let mut buf = StagingBuffer::new(BufferOptions {
        initial_capacity: usize::from(input.initial_capacity),
        growth,
        ..Default::default()
    })
    .expect("small region");
    let mut model = VecDeque::new();

    for op in input.ops {
        match op {
            Op::Append(data) => {
                let capacity = buf.capacity();
                let relocation = buf.append(&data).expect("append");
                if let Relocation::Compacted { .. } = relocation {
                    assert_eq!(buf.capacity(), capacity);
                }
                model.extend(data);
            }
            Op::Consume(n) => {
                let n = usize::from(n);
                buf.consume(n);
                model.drain(..n.min(model.len()));
            }
            Op::Drain => {
                buf.consume(buf.len());
                model.clear();
            }
            Op::Reserve(n) => {
                let n = usize::from(n);
                buf.reserve(n).expect("reserve");
                assert!(buf.trailing_free() >= n);
            }
            Op::Commit { n, fill } => {
                let n = usize::from(n).min(buf.trailing_free());
                buf.spare_mut()[..n].fill(fill);
                buf.commit(n);
                model.extend(std::iter::repeat_n(fill, n));
            }
            Op::Shrink(n) => {
                buf.shrink_to(usize::from(n)).expect("shrink");
            }
            Op::Clear => {
                buf.clear();
                model.clear();
            }
        }

        assert!(buf.len() + buf.leading_free() + buf.trailing_free() == buf.capacity());
        if buf.is_empty() {
            assert_eq!(buf.leading_free(), 0);
        }
        assert_eq!(buf.peek(), model.make_contiguous());
    }
}

fuzz_target!(|input: Input| run(input));
