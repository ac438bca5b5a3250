//! Path parameters.

use crate::components::Span;
use crate::parser::str::{find, rfind};

/// Splits parameters from the last segment of the path.
///
/// Returns the path without parameters, and the parameters (without the
/// leading semicolon). A semicolon in any segment other than the last one
/// does not start parameters.
#[must_use]
pub(crate) fn split_params(url: &[u8], path: Span) -> Option<(Span, Span)> {
    let path_bytes = &url[path.range()];
    let last_segment_start = rfind(path_bytes, b'/').map_or(0, |slash| slash + 1);
    let semicolon = last_segment_start + find(&path_bytes[last_segment_start..], b';')?;
    let semicolon = path.start + semicolon;
    Some((
        Span::new(path.start, semicolon),
        Span::new(semicolon + 1, path.end),
    ))
}
