use libc::{LC_ALL, setlocale};

/// Switch the C runtime to the host locale so the console renders
/// non-ASCII label text correctly.
///
/// On Linux the terminal encoding comes from the environment locale
/// (LANG / LC_*); calling setlocale with an empty string adopts it.
/// There is no result worth acting on here: if the locale cannot be
/// set the C default stays in place and output continues with
/// whatever the terminal makes of the bytes.
pub fn configure_output_encoding() {
    unsafe {
        setlocale(LC_ALL, c"".as_ptr());
    }
}
