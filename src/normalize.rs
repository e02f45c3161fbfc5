//! Case folding applied before any matching.

/// Inputs up to this many bytes are folded in a stack buffer.
pub(crate) const SCRATCH_LEN: usize = 1024;

/// Lowercases a raw User-Agent. Every matcher in this crate expects its
/// input in this form.
pub fn normalize(raw: &str) -> String {
    with_normalized(raw, str::to_owned)
}

/// Runs `f` over the lowercased form of `raw` without touching the heap for
/// short ASCII input. Longer or non-ASCII input is folded with
/// [`str::to_lowercase`].
pub(crate) fn with_normalized<R>(raw: &str, f: impl FnOnce(&str) -> R) -> R {
    let mut scratch = [0u8; SCRATCH_LEN];
    if raw.len() <= SCRATCH_LEN {
        if let Some(folded) = fold_ascii(raw.as_bytes(), &mut scratch[..raw.len()]) {
            return f(folded);
        }
    }
    f(&raw.to_lowercase())
}

fn fold_ascii<'a>(src: &[u8], dst: &'a mut [u8]) -> Option<&'a str> {
    for (out, &b) in dst.iter_mut().zip(src) {
        if !b.is_ascii() {
            return None;
        }
        *out = b.to_ascii_lowercase();
    }
    std::str::from_utf8(dst).ok()
}
