//! Parser.
//!
//! Everything in this module works on byte offsets into a single buffer, so
//! that the results can refer to the input without copying it.

use alloc::vec::Vec;

use crate::log::debug;

use self::char::{is_c0_control_or_space, is_embedded_control};

pub(crate) mod char;
mod params;
mod split;
pub(crate) mod str;

pub(crate) use self::params::split_params;
pub(crate) use self::split::decompose;

/// Returns the number of leading C0 control or space bytes.
#[inline]
#[must_use]
pub(crate) fn leading_c0_control_or_space(s: &[u8]) -> usize {
    s.iter()
        .position(|&b| !is_c0_control_or_space(b))
        .unwrap_or(s.len())
}

/// Returns the position of the first tab, LF, or CR byte.
#[inline]
#[must_use]
fn find_embedded_control(s: &[u8]) -> Option<usize> {
    self::str::find3(s, b'\t', b'\n', b'\r')
}

/// Checks if the given bytes contain a tab, LF, or CR byte.
#[inline]
#[must_use]
pub(crate) fn contains_embedded_control(s: &[u8]) -> bool {
    find_embedded_control(s).is_some()
}

/// Removes tab, LF, and CR bytes by moving the rest to the front.
///
/// Returns the length of the remaining content. Bytes after that length are
/// left unspecified.
#[must_use]
pub(crate) fn remove_embedded_control_in_place(buf: &mut [u8]) -> usize {
    let first = match find_embedded_control(buf) {
        Some(pos) => pos,
        None => return buf.len(),
    };
    let mut len = first;
    for i in first..buf.len() {
        let b = buf[i];
        if !is_embedded_control(b) {
            buf[len] = b;
            len += 1;
        }
    }
    debug!(
        "removed {} embedded control byte(s) in place",
        buf.len() - len
    );
    len
}

/// Returns a copy of the given bytes without tab, LF, and CR bytes.
#[must_use]
pub(crate) fn remove_embedded_control_to_vec(s: &[u8]) -> Vec<u8> {
    let v: Vec<u8> = s.iter().copied().filter(|&b| !is_embedded_control(b)).collect();
    debug!(
        "removed {} embedded control byte(s) into a copy",
        s.len() - v.len()
    );
    v
}
