/// Every `[x, y]` of a `wide × high` grid, rows first.
pub fn row_major(wide: usize, high: usize) -> impl Iterator<Item = [usize; 2]> {
    (0..high).flat_map(move |y| (0..wide).map(move |x| [x, y]))
}

/// Content digest for log lines; not cryptographic.
pub const fn fnv1a_64(bs: &[u8]) -> u64 {
    const H0: u64 = 0xcbf29ce4_84222325;
    const A:  u64 = 0x00000100_000001b3;

    let mut h = H0;
    let mut i = 0;
    while i != bs.len() {
        h ^= bs[i] as u64;
        h = h.wrapping_mul(A);
        i += 1;
    }
    h
}

#[cfg(test)]
#[test]
fn row_major_order() {
    let xys = row_major(3, 2).collect::<Vec<_>>();
    assert_eq!(xys, [[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [2, 1]]);
    assert_eq!(row_major(0, 5).count(), 0);
    assert_eq!(row_major(5, 0).count(), 0);
}

#[cfg(test)]
#[test]
fn fnv1a_known_values() {
    assert_eq!(fnv1a_64(b""), 0xcbf29ce4_84222325);
    assert_eq!(fnv1a_64(b"a"), 0xaf63dc4c_8601ec8c);
    assert_ne!(fnv1a_64(b"00\n"), fnv1a_64(b"01\n"));
}
