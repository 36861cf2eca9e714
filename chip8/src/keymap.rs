use anyhow::{bail, Result};

/// # Keymap
/// Chip-8 input is generated with a hexadecimal keypad.
///
/// Keys are named on the command line by the hex digit printed on them.
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
pub fn keymap(key: char) -> Option<u8> {
    key.to_digit(16).map(|index| index as u8)
}

/// Maps every character of `keys` to a keypad index, failing on the first one that isn't a key
pub fn parse_keys(keys: &str) -> Result<Vec<u8>> {
    keys.chars()
        .map(|key| match keymap(key) {
            Some(index) => Ok(index),
            None => bail!("{:?} is not a key on the hex keypad (0-9, a-f)", key),
        })
        .collect()
}
