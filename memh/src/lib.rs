//! Memory-init text: one hexadecimal byte per line, the layout `$readmemh`
//! loads into a testbench memory array.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("line {line}: not valid UTF-8")]
    NotUtf8 { line: usize },
    #[error("line {line}: {token:?} is not a hexadecimal integer")]
    BadToken { line: usize, token: String },
    #[error("line {line}: {token:?} does not fit in a byte")]
    OutOfRange { line: usize, token: String },
}

/// What to do with a value above `0xff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    #[default]
    Reject,
    /// Keep the low eight bits.
    Wrap,
}

impl std::str::FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(RangePolicy::Reject),
            "wrap"   => Ok(RangePolicy::Wrap),
            _ => Err(format!("unknown range policy {s:?} (expected reject or wrap)")),
        }
    }
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Bytes of text per sample: two digits and a newline.
pub const LINE_LEN: usize = 3;

pub fn encode_some<Output>(output: &mut Output, samples: &[u8])
where
    Output: Extend<u8>,
{
    for &sample in samples {
        output.extend([
            DIGITS[(sample >> 4) as usize],
            DIGITS[(sample & 0xf) as usize],
            b'\n',
        ]);
    }
}

pub fn encode_memh_file(samples: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * LINE_LEN);
    encode_some(&mut bytes, samples);
    bytes
}

/// Parses one line. `Ok(None)` for a blank line.
///
/// `line` is the 1-based line number, used only for errors.
pub fn decode_line(raw: &[u8], line: usize, policy: RangePolicy)
    -> Result<Option<u8>, DecodeError>
{
    let text = std::str::from_utf8(raw).map_err(|_| DecodeError::NotUtf8{line})?;
    let token = text.trim();
    if token.is_empty() {return Ok(None)}

    let digits = token.strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::BadToken{line, token: token.into()});
    }

    // the low byte of a hex number is its last two digits
    let significant = digits.trim_start_matches('0');
    let low = &digits[digits.len().saturating_sub(2)..];
    if significant.len() > 2 && policy == RangePolicy::Reject {
        return Err(DecodeError::OutOfRange{line, token: token.into()});
    }

    let value = u8::from_str_radix(low, 16)
        .map_err(|_| DecodeError::BadToken{line, token: token.into()})?;
    Ok(Some(value))
}

/// Lines end at `\n`, `\r\n` or a bare `\r`.
fn lines(mut bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    std::iter::from_fn(move || {
        if bytes.is_empty() {return None}
        let end = bytes.iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(bytes.len());
        let (line, rest) = bytes.split_at(end);
        bytes = match rest {
            [b'\r', b'\n', rest@..] | [_, rest@..] => rest,
            [] => rest,
        };
        Some(line)
    })
}

pub fn decode_memh_file(bytes: &[u8], policy: RangePolicy) -> Result<Vec<u8>, DecodeError> {
    let mut samples = Vec::with_capacity(bytes.len() / LINE_LEN);
    for (i, raw) in lines(bytes).enumerate() {
        if let Some(sample) = decode_line(raw, i + 1, policy)? {
            samples.push(sample);
        }
    }
    Ok(samples)
}

#[cfg(test)]
#[test]
fn encode_pads_to_two_lowercase_digits() {
    let text = encode_memh_file(&[0x00, 0x0a, 0xab, 0xff]);
    assert_eq!(text, b"00\n0a\nab\nff\n");
    assert!(encode_memh_file(&[]).is_empty());
}

#[cfg(test)]
#[test]
fn encode_extends_existing_output() {
    let mut out = b"// header\n".to_vec();
    encode_some(&mut out, &[1, 2]);
    assert_eq!(out, b"// header\n01\n02\n");
}

#[cfg(test)]
#[test]
fn decode_memh_files() {
    let samples = decode_memh_file(b"00\n01\n\nfe\r\n  FF  \n", RangePolicy::Reject).unwrap();
    assert_eq!(samples, [0x00, 0x01, 0xfe, 0xff]);

    // no width assumption, optional prefix
    let samples = decode_memh_file(b"0\nf\n0x7f\n0X80\n000000c3", RangePolicy::Reject).unwrap();
    assert_eq!(samples, [0x00, 0x0f, 0x7f, 0x80, 0xc3]);

    assert!(decode_memh_file(b"", RangePolicy::Reject).unwrap().is_empty());
    assert!(decode_memh_file(b"\n\n \n", RangePolicy::Reject).unwrap().is_empty());
}

#[cfg(test)]
#[test]
fn decode_any_line_ending() {
    let samples = decode_memh_file(b"01\r02\r\r03\r\n04\n05", RangePolicy::Reject).unwrap();
    assert_eq!(samples, [1, 2, 3, 4, 5]);

    let err = decode_memh_file(b"00\r\n01\r\nzz\r\n", RangePolicy::Reject).unwrap_err();
    assert_eq!(err, DecodeError::BadToken{line: 3, token: "zz".into()});

    let err = decode_memh_file(b"00\r01\r\rzz\r", RangePolicy::Reject).unwrap_err();
    assert_eq!(err, DecodeError::BadToken{line: 4, token: "zz".into()});
}

#[cfg(test)]
#[test]
fn decode_reports_line_of_bad_token() {
    let err = decode_memh_file(b"00\n\nzz\n01\n", RangePolicy::Reject).unwrap_err();
    assert_eq!(err, DecodeError::BadToken{line: 3, token: "zz".into()});

    let bads: [&[u8]; 5] = [b"0x", b"-1", b"+1", b"1 2", b"f_f"];
    for bad in bads {
        let err = decode_line(bad, 7, RangePolicy::Wrap).unwrap_err();
        assert!(matches!(err, DecodeError::BadToken{line: 7, ..}), "{bad:?}");
    }

    let err = decode_memh_file(b"00\n\xff\xfe\n", RangePolicy::Reject).unwrap_err();
    assert_eq!(err, DecodeError::NotUtf8{line: 2});
}

#[cfg(test)]
#[test]
fn range_policy() {
    let err = decode_memh_file(b"ff\n100\n", RangePolicy::Reject).unwrap_err();
    assert_eq!(err, DecodeError::OutOfRange{line: 2, token: "100".into()});

    let samples = decode_memh_file(b"ff\n100\n1ab\nfffffffffffffffffffff01\n", RangePolicy::Wrap)
        .unwrap();
    assert_eq!(samples, [0xff, 0x00, 0xab, 0x01]);

    assert_eq!("reject".parse::<RangePolicy>(), Ok(RangePolicy::Reject));
    assert_eq!("wrap".parse::<RangePolicy>(), Ok(RangePolicy::Wrap));
    assert!("clamp".parse::<RangePolicy>().is_err());
}
