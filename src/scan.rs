//! Byte-level helpers for pulling version numbers out of lowercased UA text.

use crate::types::Version;

/// Parses the version run at the start of `s`: digits, then up to two more
/// `sep digits` groups where `sep` is whichever of `_` or `.` first follows
/// the leading digits. Returns the version and the number of bytes consumed,
/// or `None` if `s` does not start with a digit.
///
/// Components beyond the third are not consumed. A separator that is not
/// followed by a digit ends the run. Overflowing components saturate.
pub(crate) fn leading_version(s: &str) -> Option<(Version, usize)> {
    let bytes = s.as_bytes();
    let (major, mut pos) = digits(bytes, 0)?;
    let mut parts = [major, 0, 0];

    let sep = match bytes.get(pos) {
        Some(&b) if (b == b'.' || b == b'_') && is_digit_at(bytes, pos + 1) => b,
        _ => return Some((Version::new(major, 0, 0), pos)),
    };

    for part in parts.iter_mut().skip(1) {
        if bytes.get(pos) != Some(&sep) || !is_digit_at(bytes, pos + 1) {
            break;
        }
        let (value, end) = digits(bytes, pos + 1)?;
        *part = value;
        pos = end;
    }

    Some((Version::new(parts[0], parts[1], parts[2]), pos))
}

/// Version directly following the leftmost occurrence of `marker` that is
/// followed by a digit.
pub(crate) fn version_after(s: &str, marker: &str) -> Option<Version> {
    s.match_indices(marker)
        .find_map(|(at, _)| leading_version(&s[at + marker.len()..]))
        .map(|(v, _)| v)
}

/// Like [`version_after`] over several markers: the candidate that appears
/// first in `s` wins, ties going to the earlier marker.
pub(crate) fn version_after_any(s: &str, markers: &[&str]) -> Option<Version> {
    markers
        .iter()
        .filter_map(|marker| {
            s.match_indices(marker).find_map(|(at, _)| {
                leading_version(&s[at + marker.len()..]).map(|(v, _)| (at, v))
            })
        })
        .min_by_key(|&(at, _)| at)
        .map(|(_, v)| v)
}

fn is_digit_at(bytes: &[u8], at: usize) -> bool {
    bytes.get(at).is_some_and(u8::is_ascii_digit)
}

fn digits(bytes: &[u8], start: usize) -> Option<(u32, usize)> {
    let len = bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    let value = bytes[start..start + len].iter().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });
    Some((value, start + len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32, minor: u32, patch: u32) -> Version {
        Version::new(major, minor, patch)
    }

    #[test]
    fn leading_runs() {
        assert_eq!(leading_version("10_8_2 like"), Some((v(10, 8, 2), 6)));
        assert_eq!(leading_version("43.0.2357.130 safari"), Some((v(43, 0, 2357), 9)));
        assert_eq!(leading_version("5.01; windows"), Some((v(5, 1, 0), 4)));
        assert_eq!(leading_version("10.05.2"), Some((v(10, 5, 2), 7)));
        assert_eq!(leading_version("4."), Some((v(4, 0, 0), 1)));
        assert_eq!(leading_version("8.a"), Some((v(8, 0, 0), 1)));
        assert_eq!(leading_version("x"), None);
        assert_eq!(leading_version(""), None);
    }

    #[test]
    fn separator_is_fixed_by_the_first_one() {
        assert_eq!(leading_version("7_0.3"), Some((v(7, 0, 0), 3)));
        assert_eq!(leading_version("7.0_3"), Some((v(7, 0, 0), 3)));
    }

    #[test]
    fn overflow_saturates() {
        let (parsed, _) = leading_version("99999999999.1").unwrap();
        assert_eq!(parsed, v(u32::MAX, 1, 0));
    }

    #[test]
    fn marker_must_be_followed_by_digit() {
        let ua = "mozilla/5.0 version/ x version/8.0 safari";
        assert_eq!(version_after(ua, "version/"), Some(v(8, 0, 0)));
        assert_eq!(version_after(ua, "chrome/"), None);
    }

    #[test]
    fn leftmost_marker_wins() {
        let ua = "crios/19.0.1084.60 chrome/20.1";
        assert_eq!(version_after_any(ua, &["chrome/", "crios/"]), Some(v(19, 0, 1084)));
        assert_eq!(version_after_any(ua, &["opr/"]), None);
    }
}
