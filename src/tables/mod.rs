//! Character tables for the legacy encodings.
//!
//! Each encoding is described by a forward table mapping Unicode scalar
//! values to one to three legacy bytes. The reverse table used for decoding is
//! derived from it once, at first use, and shared for the rest of the process.
//!
//! Declaration order of the forward table matters: when several characters
//! map to the same byte sequence, the first one listed becomes the decode
//! target and the others are encode-only.

pub(crate) mod iso5426;
pub(crate) mod marc;

use indexmap::map::Entry;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::debug;

/// Longest byte sequence a single character may map to.
pub const MAX_SEQUENCE_LEN: usize = 3;

/// Single-byte decode overrides consulted before the reverse table.
pub type ByteOverrides = IndexMap<u8, char>;

/// Bidirectional character table for one legacy encoding.
#[derive(Debug)]
pub struct CharTable {
    name: &'static str,
    forward: IndexMap<char, &'static [u8]>,
    reverse: IndexMap<&'static [u8], char>,
    collisions: usize,
}

impl CharTable {
    /// Build a table from `(char, bytes)` entries in declaration order.
    ///
    /// A character listed twice keeps its first position and its last byte
    /// sequence. The reverse table keeps the first character seen for each
    /// byte sequence.
    #[must_use]
    pub fn from_entries(name: &'static str, entries: &[(char, &'static [u8])]) -> Self {
        let mut forward = IndexMap::with_capacity(entries.len());
        for &(ch, bytes) in entries {
            debug_assert!(
                !bytes.is_empty() && bytes.len() <= MAX_SEQUENCE_LEN,
                "{name}: {ch:?} maps to {} bytes",
                bytes.len()
            );
            forward.insert(ch, bytes);
        }

        let (reverse, collisions) = build_reverse(&forward);
        debug!(
            "built {name} table: {} characters, {} byte sequences, {collisions} collisions",
            forward.len(),
            reverse.len()
        );

        CharTable {
            name,
            forward,
            reverse,
            collisions,
        }
    }

    /// Name of the encoding this table belongs to.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte sequence for a character.
    #[must_use]
    pub fn encode_char(&self, ch: char) -> Option<&'static [u8]> {
        self.forward.get(&ch).copied()
    }

    /// Character for a byte sequence.
    #[must_use]
    pub fn decode_sequence(&self, bytes: &[u8]) -> Option<char> {
        self.reverse.get(bytes).copied()
    }

    /// Character for a single byte.
    #[must_use]
    pub fn decode_byte(&self, byte: u8) -> Option<char> {
        self.decode_sequence(&[byte])
    }

    /// Forward entries in declaration order.
    pub fn forward_entries(&self) -> impl Iterator<Item = (char, &'static [u8])> + '_ {
        self.forward.iter().map(|(&ch, &bytes)| (ch, bytes))
    }

    /// Reverse entries in the order they were first inserted.
    pub fn reverse_entries(&self) -> impl Iterator<Item = (&'static [u8], char)> + '_ {
        self.reverse.iter().map(|(&bytes, &ch)| (bytes, ch))
    }

    /// Number of characters with a byte sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of forward entries that lost a byte-sequence collision.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

/// Derive the byte-sequence table, first entry wins.
fn build_reverse(
    forward: &IndexMap<char, &'static [u8]>,
) -> (IndexMap<&'static [u8], char>, usize) {
    let mut reverse = IndexMap::with_capacity(forward.len());
    let mut collisions = 0;
    for (&ch, &bytes) in forward {
        match reverse.entry(bytes) {
            Entry::Vacant(slot) => {
                slot.insert(ch);
            },
            Entry::Occupied(_) => collisions += 1,
        }
    }
    (reverse, collisions)
}

lazy_static! {
    /// ISO-5426 / MAB2 table.
    pub static ref ISO5426: CharTable =
        CharTable::from_entries("iso-5426", iso5426::ISO5426_ENTRIES);

    /// USMARC / ANSEL table.
    pub static ref MARC: CharTable = CharTable::from_entries("marc", marc::MARC_ENTRIES);

    /// Overrides used by the ISO-5426 `xe0` variant: `0xA4` and `0xE0..=0xFF`
    /// decode to the Latin-1 character of the same value.
    pub static ref XE0_OVERRIDES: ByteOverrides = std::iter::once(0xA4)
        .chain(0xE0..=0xFF)
        .map(|b: u8| (b, char::from(b)))
        .collect();
}
