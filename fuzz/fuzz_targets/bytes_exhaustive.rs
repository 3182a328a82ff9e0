//! Exhaustive boundary fuzzer for the length-prefixed encoding
//!
//! Every input is encoded once as-is, then truncated or zero-extended to each
//! length around the header switch and alignment boundaries. Random sampling
//! rarely lands on 253/254/255 exactly, so those are always covered.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pulser_tl::{tl_bytes_len, TlBuffer};

// Lengths around the single-byte/four-byte header switch and 4-byte alignment
const EDGE_LENGTHS: &[usize] = &[
    0, 1, 2, 3, 4, 5,
    250, 251, 252, 253, // last single-byte lengths
    254, 255, 256, 257, // first four-byte lengths
    1023, 1024, 1025,
];

fn check(data: &[u8]) {
    let mut buf = TlBuffer::new(tl_bytes_len(data.len()));
    buf.write_bytes(data).expect("lengths under 16 MiB always encode");
    let out = buf.as_bytes();

    // INVARIANT 1: Size matches the formula and is 4-byte aligned
    assert_eq!(out.len(), tl_bytes_len(data.len()), "size mismatch for len={}", data.len());
    assert_eq!(out.len() % 4, 0, "unaligned output for len={}", data.len());

    // INVARIANT 2: Header carries the length
    let header = if data.len() < 254 {
        assert_eq!(out[0] as usize, data.len());
        1
    } else {
        assert_eq!(out[0], 254);
        let len = u32::from_le_bytes([out[1], out[2], out[3], 0]) as usize;
        assert_eq!(len, data.len());
        4
    };

    // INVARIANT 3: Data is copied verbatim and padding is zero
    assert_eq!(&out[header..header + data.len()], data);
    assert!(out[header + data.len()..].iter().all(|&b| b == 0), "non-zero padding");
    assert!(out.len() - header - data.len() < 4, "over-padded for len={}", data.len());
}

fuzz_target!(|data: &[u8]| {
    check(data);

    for &len in EDGE_LENGTHS {
        if len <= data.len() {
            check(&data[..len]);
        } else {
            let mut extended = data.to_vec();
            extended.resize(len, 0);
            check(&extended);
        }
    }

    // INVARIANT 4: Vector size is header plus the sum of element sizes
    let items: Vec<String> =
        data.chunks(97).map(|chunk| String::from_utf8_lossy(chunk).into_owned()).collect();
    let mut buf = TlBuffer::new(0);
    buf.write_vector_string(&items).expect("short strings always encode");
    let expected: usize = 8 + items.iter().map(|s| tl_bytes_len(s.len())).sum::<usize>();
    assert_eq!(buf.len(), expected);
});
