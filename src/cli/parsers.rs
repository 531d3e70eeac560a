use std::str::FromStr;

/// Wrapper type to parse a single-byte field delimiter (e.g. `;`, `tab`, `\t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterArg(pub u8);

impl Default for DelimiterArg {
    fn default() -> Self {
        Self(b',')
    }
}

impl FromStr for DelimiterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(byte) = named_delimiter(&s.to_ascii_lowercase()) {
            return Ok(Self(byte));
        }
        match s.as_bytes() {
            [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() && *byte != b'"' && *byte != b'\n' => {
                Ok(Self(*byte))
            }
            _ => Err(format!(
                "Invalid delimiter: {s:?} (expected one ASCII symbol or tab/comma/semicolon/pipe/space)"
            )),
        }
    }
}

fn named_delimiter(s: &str) -> Option<u8> {
    const NAMES: &[(&[&str], u8)] = &[
        (&["tab", "\\t"], b'\t'),
        (&["comma"], b','),
        (&["semicolon"], b';'),
        (&["pipe"], b'|'),
        (&["space"], b' '),
    ];
    NAMES
        .iter()
        .find(|(names, _)| names.contains(&s))
        .map(|(_, byte)| *byte)
}
