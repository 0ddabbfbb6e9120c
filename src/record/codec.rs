//! Record codec
//!
//! Encoding and decoding of the fixed-width record layout.
//!
//! ## Layout
//! ```text
//! offset  width  field
//!      0      4  id (i32)
//!      4     50  username (NUL-padded)
//!     54      2  padding
//!     56      8  latitude (f64)
//!     64      8  longitude (f64)
//!     72    256  clue (NUL-padded)
//!    328      4  value (i32)
//!    332      4  padding
//! ```

use bytes::{Buf, BufMut, BytesMut};

use super::treasure::{truncate_to, Treasure, CLUE_LEN, USERNAME_LEN};

/// Padding after the username so the coordinates stay 8-byte aligned
const USERNAME_PAD: usize = 2;

/// Trailing padding rounding the record up to a multiple of 8
const TAIL_PAD: usize = 4;

/// Size of one encoded record in bytes
pub const RECORD_SIZE: usize = 4 + USERNAME_LEN + USERNAME_PAD + 8 + 8 + CLUE_LEN + 4 + TAIL_PAD;

/// Encode a treasure into exactly `RECORD_SIZE` bytes
///
/// Text that does not fit is truncated at a character boundary so the field
/// always ends with at least one NUL.
pub fn encode(treasure: &Treasure) -> BytesMut {
    let mut buf = BytesMut::with_capacity(RECORD_SIZE);

    buf.put_i32_le(treasure.id);
    put_text(&mut buf, &treasure.username, USERNAME_LEN);
    buf.put_bytes(0, USERNAME_PAD);
    buf.put_f64_le(treasure.latitude);
    buf.put_f64_le(treasure.longitude);
    put_text(&mut buf, &treasure.clue, CLUE_LEN);
    buf.put_i32_le(treasure.value);
    buf.put_bytes(0, TAIL_PAD);

    debug_assert_eq!(buf.len(), RECORD_SIZE);
    buf
}

/// Decode one record from the front of `bytes`
///
/// Returns `None` if fewer than `RECORD_SIZE` bytes are available.
pub fn decode(bytes: &[u8]) -> Option<Treasure> {
    if bytes.len() < RECORD_SIZE {
        return None;
    }
    let mut buf = &bytes[..RECORD_SIZE];

    let id = buf.get_i32_le();
    let username = get_text(&mut buf, USERNAME_LEN);
    buf.advance(USERNAME_PAD);
    let latitude = buf.get_f64_le();
    let longitude = buf.get_f64_le();
    let clue = get_text(&mut buf, CLUE_LEN);
    let value = buf.get_i32_le();

    Some(Treasure {
        id,
        username,
        latitude,
        longitude,
        clue,
        value,
    })
}

/// Read only the id of an encoded record
pub fn decode_id(bytes: &[u8]) -> Option<i32> {
    let mut buf = bytes.get(..4)?;
    Some(buf.get_i32_le())
}

fn put_text(buf: &mut BytesMut, text: &str, width: usize) {
    let text = truncate_to(text.to_owned(), width - 1);
    buf.put_slice(text.as_bytes());
    buf.put_bytes(0, width - text.len());
}

fn get_text(buf: &mut &[u8], width: usize) -> String {
    let field = &buf[..width];
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    let text = String::from_utf8_lossy(&field[..end]).into_owned();
    buf.advance(width);
    text
}
