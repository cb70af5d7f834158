use super::lexer::HostLexer;
use super::*;

#[no_mangle]
pub extern "C" fn tree_sitter_svelte_external_scanner_create() -> *mut c_void {
    to_ptr_mut(Scanner::new()).cast()
}

#[no_mangle]
pub extern "C" fn tree_sitter_svelte_external_scanner_destroy(payload: *mut c_void) {
    let scanner = payload.cast::<Scanner>();

    drop(to_box!(scanner));
}

#[no_mangle]
pub extern "C" fn tree_sitter_svelte_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let scanner = payload.cast::<Scanner>();
    let scanner = to_ref_mut!(scanner);
    let valid_symbols = ValidSymbols::from_flags(to_slice!(valid_symbols, TOKEN_KIND_COUNT));
    let mut lexer = HostLexer::new(lexer);

    match scanner.scan(&mut lexer, valid_symbols) {
        Some(kind) => {
            lexer.set_result_symbol(kind);
            true
        }
        None => false,
    }
}

#[no_mangle]
pub extern "C" fn tree_sitter_svelte_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    let scanner = payload.cast::<Scanner>();
    let scanner = to_ref_mut!(scanner);
    let buffer = buffer.cast::<u8>();
    let buffer = to_slice_mut!(buffer, TREE_SITTER_SERIALIZATION_BUFFER_SIZE);

    // NOTE: the length never exceeds the buffer size, which fits into `c_uint`.
    scanner.serialize(buffer) as c_uint
}

#[no_mangle]
pub extern "C" fn tree_sitter_svelte_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let scanner = payload.cast::<Scanner>();
    let scanner = to_ref_mut!(scanner);

    // NOTE: the runtime passes NULL for an empty state.
    if length == 0 {
        scanner.deserialize(&[]);
        return;
    }

    let buffer = buffer.cast::<u8>();

    scanner.deserialize(to_slice!(buffer, length as usize));
}
