use libc::{c_char, c_uint, c_void};
use std::slice;
use svelte_scanner::*;

#[inline]
fn to_ptr_mut<T>(val: T) -> *mut T {
    Box::into_raw(Box::new(val))
}

// NOTE: abort the thread if we receive NULL where unexpected
macro_rules! assert_not_null {
    ($var:ident) => {
        assert!(!$var.is_null(), "{} is NULL", stringify!($var));
    };
}

// NOTE: all these utilities are macros so we can propagate the variable
// name to the null pointer assertion.
macro_rules! to_ref_mut {
    ($ptr:ident) => {{
        assert_not_null!($ptr);
        unsafe { &mut *$ptr }
    }};
}

macro_rules! to_box {
    ($ptr:ident) => {{
        assert_not_null!($ptr);
        unsafe { Box::from_raw($ptr) }
    }};
}

macro_rules! to_slice {
    ($data:ident, $len:expr) => {{
        assert_not_null!($data);
        unsafe { slice::from_raw_parts($data, $len) }
    }};
}

macro_rules! to_slice_mut {
    ($data:ident, $len:expr) => {{
        assert_not_null!($data);
        unsafe { slice::from_raw_parts_mut($data, $len) }
    }};
}

mod lexer;
mod scanner;

pub use self::lexer::TSLexer;
