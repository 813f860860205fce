use alloc::vec::Vec;

use insta::assert_debug_snapshot;

use crate::StagingBuffer;

/// A parser that consumes request lines piecemeal while the socket keeps
/// delivering: the tiers must be taken in cheapest-first order.
#[test]
fn request_line_relocations() {
    let mut buf = StagingBuffer::with_capacity(8).unwrap();
    let mut trace = Vec::new();

    trace.push(buf.append(b"GET /").unwrap());
    buf.consume(4);
    trace.push(buf.append(b"index").unwrap());
    trace.push(buf.append(b" HTTP/1.1\r\n").unwrap());
    assert_eq!(buf.peek(), b"/index HTTP/1.1\r\n");
    buf.consume(buf.len());
    trace.push(buf.append(b"\r\n").unwrap());

    assert_debug_snapshot!(trace, @r"
    [
        InPlace,
        Compacted {
            moved: 1,
        },
        Grown {
            from: 8,
            to: 27,
        },
        InPlace,
    ]
    ");
    assert_debug_snapshot!(buf, @r#"
    StagingBuffer {
        read: 0,
        write: 2,
        capacity: 27,
        unread: "\r\n",
    }
    "#);
}
