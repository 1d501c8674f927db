//! Slow/fast cursor walks shared by the owned list and the arena chain.
//!
//! Both walks are written against a successor function, so they work for any
//! node handle that is cheap to copy: borrowed nodes compared by address, or
//! arena indices.

/// Floyd's cycle check: fast advances two links per step, slow one.
/// Returns false as soon as fast runs off the end.
pub(crate) fn has_cycle<T, F>(head: Option<T>, next: F) -> bool
where
    T: Copy + PartialEq,
    F: Fn(T) -> Option<T>,
{
    let mut slow = head;
    let mut fast = head;
    while let Some(step) = fast.and_then(&next) {
        fast = next(step);
        slow = slow.and_then(&next);
        if fast.is_some() && fast == slow {
            return true;
        }
    }
    false
}

/// Middle node of an acyclic chain.
///
/// Stops when fast or its successor is absent, so even lengths yield the
/// upper middle (index `len / 2`).
pub(crate) fn middle<T, F>(head: Option<T>, next: F) -> Option<T>
where
    T: Copy,
    F: Fn(T) -> Option<T>,
{
    let mut slow = head?;
    let mut fast = head;
    while let Some(step) = fast.and_then(&next) {
        fast = next(step);
        slow = next(slow)?;
    }
    Some(slow)
}
