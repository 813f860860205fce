#![allow(missing_docs)]
use stagebuf::StagingBuffer;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn relocating_tiers_emit_events() {
    let mut buf = StagingBuffer::with_capacity(8).unwrap();
    buf.append(b"ABCD").unwrap();
    assert!(!logs_contain("staging region"));

    buf.consume(2);
    buf.append(b"EFGHIJ").unwrap();
    assert!(logs_contain("compacted staging region"));
    assert!(logs_contain("moved=2"));

    buf.append(b"KLM").unwrap();
    assert!(logs_contain("grew staging region"));
    assert!(logs_contain("from=8"));
    assert!(logs_contain("to=19"));

    buf.consume(buf.len());
    buf.shrink_to(4).unwrap();
    assert!(logs_contain("shrunk staging region"));
    assert!(logs_contain("to=4"));
}

#[test]
#[traced_test]
fn failed_growth_is_not_logged() {
    let mut buf = StagingBuffer::with_capacity(4).unwrap();
    let _err = buf.reserve(usize::MAX).unwrap_err();
    assert!(!logs_contain("staging region"));
}
