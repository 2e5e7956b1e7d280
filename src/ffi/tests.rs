use super::*;
use std::ptr;

#[test]
fn test_mul() {
    assert_eq!(mul(6, 7), 42);
    assert_eq!(mul(i32::MAX, 2), -2);
}

#[test]
fn test_dot() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    let result = unsafe { dot(a.as_ptr(), b.as_ptr(), a.len()) };
    assert_eq!(result, 32);
}

#[test]
fn test_dot_zero_length_never_reads() {
    let result = unsafe { dot(ptr::null(), ptr::null(), 0) };
    assert_eq!(result, 0);

    // Dangling but non-null pointers are fine too when nothing is read
    let dangling = ptr::NonNull::<i32>::dangling().as_ptr();
    let result = unsafe { dot(dangling, dangling, 0) };
    assert_eq!(result, 0);
}

#[test]
fn test_dot_null_buffer_returns_zero() {
    let b = [4, 5, 6];
    let result = unsafe { dot(ptr::null(), b.as_ptr(), 3) };
    assert_eq!(result, 0);
}

#[test]
fn test_cross() {
    let u = [1.0f32, 0.0, 0.0];
    let v = [0.0f32, 1.0, 0.0];
    let mut w = [0.0f32; 3];
    unsafe { cross(u.as_ptr(), v.as_ptr(), w.as_mut_ptr()) };
    assert_eq!(w, [0.0, 0.0, 1.0]);
}

#[test]
fn test_cross_aliased_output() {
    // w == u: every term must still use the original u
    let mut buffer = [1.0f32, 2.0, 3.0];
    let v = [4.0f32, 5.0, 6.0];
    let p = buffer.as_mut_ptr();
    unsafe { cross(p, v.as_ptr(), p) };
    assert_eq!(buffer, [-3.0, 6.0, -3.0]);

    // w == v
    let u = [1.0f32, 2.0, 3.0];
    let mut buffer = [4.0f32, 5.0, 6.0];
    let p = buffer.as_mut_ptr();
    unsafe { cross(u.as_ptr(), p, p) };
    assert_eq!(buffer, [-3.0, 6.0, -3.0]);
}

#[test]
fn test_cross_null_output_is_ignored() {
    let u = [1.0f32, 0.0, 0.0];
    let v = [0.0f32, 1.0, 0.0];
    unsafe { cross(u.as_ptr(), v.as_ptr(), ptr::null_mut()) };
}

#[test]
fn test_cross_vectors() {
    let u = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0];
    let v = [0.0f32, 1.0, 0.0, 1.0, 0.0, 0.0];
    let mut w = [0.0f32; 6];
    unsafe { cross_vectors(u.as_ptr(), v.as_ptr(), w.as_mut_ptr(), 2) };
    assert_eq!(w, [0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
}

#[test]
fn test_cross_vectors_zero_amount() {
    let mut w: [f32; 0] = [];
    unsafe { cross_vectors(ptr::null(), ptr::null(), w.as_mut_ptr(), 0) };

    let mut untouched = [7.0f32; 3];
    let u = [1.0f32, 0.0, 0.0];
    unsafe { cross_vectors(u.as_ptr(), u.as_ptr(), untouched.as_mut_ptr(), 0) };
    assert_eq!(untouched, [7.0; 3]);
}

#[test]
fn test_cross_vectors_aliased_output() {
    let mut buffer = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0];
    let v = [0.0f32, 1.0, 0.0, 1.0, 0.0, 0.0];
    let p = buffer.as_mut_ptr();
    unsafe { cross_vectors(p, v.as_ptr(), p, 2) };
    assert_eq!(buffer, [0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
}

#[test]
fn test_overlaps() {
    let buffer = [0.0f32; 12];
    let base = buffer.as_ptr();
    unsafe {
        assert!(overlaps(base, base, 3));
        assert!(overlaps(base, base.add(2), 3));
        assert!(!overlaps(base, base.add(3), 3));
        assert!(!overlaps(base.add(6), base, 6));
    }
}

#[test]
fn test_check_non_null_reports_first_null() {
    assert!(check_non_null(&[("u", false), ("v", false)]).is_ok());
    assert_eq!(
        check_non_null(&[("u", false), ("v", true), ("w", true)]),
        Err(KernelError::NullBuffer { argument: "v" })
    );
}

#[test]
fn test_cross_vectors_output_shifted_after_input() {
    // w = u + 3: vector 1 of u must be read before vector 0 of w lands on it
    let mut buffer = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 9.0, 9.0, 9.0];
    let v = [0.0f32, 1.0, 0.0, 1.0, 0.0, 0.0];
    let p = buffer.as_mut_ptr();
    unsafe { cross_vectors(p, v.as_ptr(), p.add(3), 2) };
    assert_eq!(&buffer[3..], &[0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
}

#[test]
fn test_cross_vectors_output_shifted_before_input() {
    // w = u - 3
    let mut buffer = [9.0f32, 9.0, 9.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let v = [0.0f32, 1.0, 0.0, 1.0, 0.0, 0.0];
    let p = buffer.as_mut_ptr();
    unsafe { cross_vectors(p.add(3), v.as_ptr(), p, 2) };
    assert_eq!(&buffer[..6], &[0.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
}

#[test]
fn test_cross_vectors_output_between_inputs_is_skipped() {
    // u = w - 3 and v = w + 3: no processing order keeps both intact
    let mut buffer = [1.0f32; 12];
    let p = buffer.as_mut_ptr();
    unsafe { cross_vectors(p, p.add(6), p.add(3), 2) };
    assert_eq!(buffer, [1.0; 12]);
}

#[test]
fn test_overlap_order() {
    let buffer = [0.0f32; 12];
    let base = buffer.as_ptr();
    unsafe {
        assert_eq!(overlap_order(base, base.add(6), 6), None);
        assert_eq!(overlap_order(base, base, 6), Some(Order::Either));
        assert_eq!(overlap_order(base, base.add(3), 6), Some(Order::Descending));
        assert_eq!(overlap_order(base.add(3), base, 6), Some(Order::Ascending));
    }
}
