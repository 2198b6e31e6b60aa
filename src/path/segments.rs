use memchr::memchr_iter;
use smallvec::SmallVec;

pub type Segments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a path on `/`, dropping empty segments.
///
/// Leading, trailing and repeated slashes therefore never produce segments,
/// and both `""` and `"/"` yield no segments at all.
pub fn segments(path: &str) -> Segments<'_> {
    let mut out = Segments::new();
    let mut start = 0usize;

    for idx in memchr_iter(b'/', path.as_bytes()) {
        if idx > start {
            out.push(&path[start..idx]);
        }
        start = idx + 1;
    }

    if start < path.len() {
        out.push(&path[start..]);
    }

    out
}
