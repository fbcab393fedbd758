use serde::Serializer;

pub mod instruction;


pub type Word = u32;
pub type Operand = u32;

pub const BYTES_PER_WORD: usize = 4;

/// Width of the opcode field at the bottom of every instruction word.
pub const OPCODE_BITS: u32 = 5;
pub const OPCODE_MASK: Word = (1 << OPCODE_BITS) - 1;

pub fn word_to_bytes(word: Word) -> [u8; BYTES_PER_WORD] {
    word.to_le_bytes()
}

pub fn bytes_to_word(bytes: [u8; BYTES_PER_WORD]) -> Word {
    Word::from_le_bytes(bytes)
}

/// Renders each little-endian byte of the word on its own, e.g. `["0x5A", "0x0C", "0x00", "0x00"]`.
pub fn to_byte_string(word: Word) -> Vec<String> {
    byte_strings(&word_to_bytes(word))
}

pub fn byte_strings(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|byte| format!("0x{:02X}", byte)).collect()
}

/// `serialize_with` helper so trace records dump instruction bytes in their diagnostic form.
pub fn serialize_byte_strings<S>(bytes: &[u8; BYTES_PER_WORD], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(byte_strings(bytes))
}
