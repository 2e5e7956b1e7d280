//! Flat C ABI, loadable through `ctypes` or any C FFI.
//!
//! Buffers are caller-owned; nothing here allocates or frees. A zero count
//! never touches a pointer. A null pointer with a non-zero count is logged
//! and the call does nothing (`dot` returns 0).

use std::mem::size_of;
use std::ptr;
use std::slice;

use crate::error::KernelError;
use crate::{arithmetic, backend, geometry};

#[cfg(test)]
mod tests;

/// `a * b` with two's-complement wraparound.
#[no_mangle]
pub extern "C" fn mul(a: i32, b: i32) -> i32 {
    arithmetic::mul(a, b)
}

/// Wrapping dot product of `a[..length]` and `b[..length]`.
///
/// # Safety
///
/// Unless `length` is 0, `a` and `b` must each point to `length` readable,
/// properly aligned `i32` values.
#[no_mangle]
pub unsafe extern "C" fn dot(a: *const i32, b: *const i32, length: usize) -> i32 {
    if length == 0 {
        return 0;
    }
    if let Err(err) = check_non_null(&[("a", a.is_null()), ("b", b.is_null())]) {
        log::warn!("dot: {err}");
        return 0;
    }

    let a = slice::from_raw_parts(a, length);
    let b = slice::from_raw_parts(b, length);
    backend::get_backend().dot(a, b)
}

/// Cross product of the 3-vectors at `u` and `v`, written to `w`.
///
/// `w` may alias `u` or `v`: all six inputs are read before any output is
/// written.
///
/// # Safety
///
/// `u` and `v` must each point to 3 readable `f32`, `w` to 3 writable `f32`.
#[no_mangle]
pub unsafe extern "C" fn cross(u: *const f32, v: *const f32, w: *mut f32) {
    let pointers = [("u", u.is_null()), ("v", v.is_null()), ("w", w.is_null())];
    if let Err(err) = check_non_null(&pointers) {
        log::warn!("cross: {err}");
        return;
    }

    cross_raw(u, v, w);
}

/// Batched cross product over `amount` packed 3-vectors.
///
/// When `w` overlaps `u` or `v` the vectors are processed one at a time,
/// each read completely before it is written, descending when `w` starts
/// after the overlapping input and ascending otherwise. If `w` overlaps `u`
/// and `v` from opposite sides no order is safe; the call is logged and
/// skipped. Disjoint buffers go to the active backend.
///
/// # Safety
///
/// Unless `amount` is 0, `u` and `v` must each point to `3 * amount`
/// readable `f32` and `w` to `3 * amount` writable `f32`.
#[no_mangle]
pub unsafe extern "C" fn cross_vectors(u: *const f32, v: *const f32, w: *mut f32, amount: usize) {
    if amount == 0 {
        return;
    }
    let pointers = [("u", u.is_null()), ("v", v.is_null()), ("w", w.is_null())];
    if let Err(err) = check_non_null(&pointers) {
        log::warn!("cross_vectors: {err}");
        return;
    }
    let Some(len) = amount.checked_mul(3) else {
        log::warn!("cross_vectors: amount {amount} overflows the address space");
        return;
    };

    let order = match (overlap_order(u, w, len), overlap_order(v, w, len)) {
        (None, None) => None,
        (Some(order), None) | (None, Some(order)) => Some(order),
        (Some(a), Some(b)) => match (a, b) {
            (Order::Either, order) | (order, Order::Either) => Some(order),
            (a, b) if a == b => Some(a),
            _ => {
                log::warn!("cross_vectors: `w` overlaps `u` and `v` from opposite sides");
                return;
            }
        },
    };

    if let Some(order) = order {
        if order == Order::Descending {
            for offset in (0..len).step_by(3).rev() {
                cross_raw(u.add(offset), v.add(offset), w.add(offset));
            }
        } else {
            for offset in (0..len).step_by(3) {
                cross_raw(u.add(offset), v.add(offset), w.add(offset));
            }
        }
        return;
    }

    let u = slice::from_raw_parts(u, len);
    let v = slice::from_raw_parts(v, len);
    let w = slice::from_raw_parts_mut(w, len);
    backend::get_backend().cross_vectors(u, v, w);
}

fn check_non_null(arguments: &[(&'static str, bool)]) -> Result<(), KernelError> {
    match arguments.iter().find(|(_, is_null)| *is_null) {
        Some(&(argument, _)) => Err(KernelError::NullBuffer { argument }),
        None => Ok(()),
    }
}

unsafe fn cross_raw(u: *const f32, v: *const f32, w: *mut f32) {
    let u = read_vector3(u);
    let v = read_vector3(v);
    let result = geometry::cross(&u, &v);
    ptr::copy_nonoverlapping(result.as_ptr(), w, 3);
}

unsafe fn read_vector3(p: *const f32) -> [f32; 3] {
    [p.read(), p.add(1).read(), p.add(2).read()]
}

/// Iteration order that keeps an aliased input intact while `w` is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Order {
    /// `w` starts exactly at the input.
    Either,
    /// `w` starts before the input.
    Ascending,
    /// `w` starts after the input.
    Descending,
}

/// Safe processing order for `input` when `w` overlaps it, `None` if disjoint.
fn overlap_order(input: *const f32, w: *const f32, len: usize) -> Option<Order> {
    if !overlaps(input, w, len) {
        return None;
    }
    let (input, w) = (input as usize, w as usize);
    Some(match w.cmp(&input) {
        std::cmp::Ordering::Equal => Order::Either,
        std::cmp::Ordering::Less => Order::Ascending,
        std::cmp::Ordering::Greater => Order::Descending,
    })
}

/// Whether `[a, a + len)` and `[b, b + len)` share any `f32`.
fn overlaps(a: *const f32, b: *const f32, len: usize) -> bool {
    let bytes = len.saturating_mul(size_of::<f32>());
    let a = a as usize;
    let b = b as usize;
    a < b.saturating_add(bytes) && b < a.saturating_add(bytes)
}
