use std::num::ParseIntError;

pub fn from_hex(string: &str) -> Result<u32, ParseIntError> {
    let string = string.trim();
    let slice = if string.starts_with("0x") || string.starts_with("0X") {
        &string[2..]
    } else {
        &string[..]
    };
    u32::from_str_radix(slice, 16)
}
