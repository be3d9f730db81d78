//! Module: codec
//! Responsibility: bit-level reads and writes over the metadata flag word
//! and the secondary type word.
//! Does not own: the meaning of a bit for a given entity kind (see `decode`).
//! Boundary: pure functions, no allocation.

///
/// Bit positions (1-indexed) inside the 64-bit flag word.
///
/// Several positions are shared between entity kinds; the row's object
/// type decides which reading applies.
///

pub mod bit {
    pub const FIELD_CASE_SENSITIVE: u8 = 2;
    pub const FIELD_NOT_NULL: u8 = 3;
    pub const FIELD_MULTILINGUAL: u8 = 4;

    pub const RELATION_NOT_NULL: u8 = 4;
    pub const RELATION_CONSTRAINT: u8 = 5;

    pub const INDEX_BITMAP: u8 = 9;
    pub const INDEX_UNIQUE: u8 = 10;

    pub const TABLE_CACHED: u8 = 9;
    pub const TABLE_READONLY: u8 = 10;

    pub const TABLESPACE_INDEX: u8 = 11;
    pub const TABLESPACE_TABLE: u8 = 12;

    pub const BASELINE: u8 = 14;
}

/// Highest addressable bit position.
pub const MAX_BIT_POSITION: u8 = 64;

/// Shift of the field-size span (the span starts at bit 17).
pub const FIELD_SIZE_SHIFT: u32 = 16;

/// Shift of the relation-kind span (seven bits starting at bit 18).
pub const RELATION_KIND_SHIFT: u32 = 17;

/// Mask applied to the relation-kind span and to the type word.
pub const SEVEN_BIT_MASK: i64 = 127;

const FIELD_SIZE_MASK: i64 = i32::MAX as i64;

const fn bit_mask(position: u8) -> Option<i64> {
    if position == 0 || position > MAX_BIT_POSITION {
        None
    } else {
        Some(1_i64 << (position - 1))
    }
}

/// Read the bit at `position` (1..=64). Out-of-range positions read as unset.
#[must_use]
pub const fn read_bit(flags: i64, position: u8) -> bool {
    match bit_mask(position) {
        Some(mask) => flags & mask != 0,
        None => false,
    }
}

/// Set or clear the bit at `position`, leaving every other bit untouched.
/// Out-of-range positions return the word unchanged.
#[must_use]
pub const fn write_bit(flags: i64, position: u8, value: bool) -> i64 {
    match bit_mask(position) {
        Some(mask) if value => flags | mask,
        Some(mask) => flags & !mask,
        None => flags,
    }
}

/// Field size stored in the high span of the flag word.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub const fn read_field_size(flags: i64) -> i32 {
    ((flags >> FIELD_SIZE_SHIFT) & FIELD_SIZE_MASK) as i32
}

/// Add `size` into the field-size span.
///
/// The span is not cleared first; call [`clear_field_size`] before
/// overwriting an existing size.
#[must_use]
pub const fn write_field_size(flags: i64, size: i32) -> i64 {
    flags.wrapping_add(((size as i64) & FIELD_SIZE_MASK) << FIELD_SIZE_SHIFT)
}

/// Zero the field-size span.
#[must_use]
pub const fn clear_field_size(flags: i64) -> i64 {
    flags & !(FIELD_SIZE_MASK << FIELD_SIZE_SHIFT)
}

/// Raw relation-kind code held in the seven-bit span.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn read_relation_kind(flags: i64) -> u8 {
    ((flags >> RELATION_KIND_SHIFT) & SEVEN_BIT_MASK) as u8
}

/// Replace the relation-kind span with `code` (masked to seven bits).
#[must_use]
pub const fn write_relation_kind(flags: i64, code: u8) -> i64 {
    let cleared = flags & !(SEVEN_BIT_MASK << RELATION_KIND_SHIFT);

    cleared | (((code as i64) & SEVEN_BIT_MASK) << RELATION_KIND_SHIFT)
}

/// Low seven bits of the secondary type word.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn read_type_code(data_type: i32) -> u8 {
    (data_type & 127) as u8
}

///
/// TESTS
///
