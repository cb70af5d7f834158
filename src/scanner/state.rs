//! Serialized scanner state.
//!
//! The host persists the tag stack between scanner invocations in a buffer of
//! a fixed capacity. The layout is:
//!
//! ```text
//! bytes[0..2)  serialized tag count (u16 LE), records actually written
//! bytes[2..4)  logical tag count (u16 LE), the real stack depth capped to u16::MAX
//! records      kind id (u8), and for custom tags: name length (u8) + name bytes
//! ```
//!
//! Records that don't fit into the buffer are dropped, so a decoded stack may
//! have fewer known tags than the original. Such slots are restored as
//! placeholder tags to keep the stack depth intact.

use super::TagStack;
use crate::errors::StateDecodeError;
use crate::html::{Tag, TagKind};

const HEADER_LEN: usize = 4;
const MAX_NAME_LEN: usize = u8::MAX as usize;

#[inline]
fn truncated_name(name: &str) -> &[u8] {
    if name.len() <= MAX_NAME_LEN {
        return name.as_bytes();
    }

    let mut end = MAX_NAME_LEN;

    while !name.is_char_boundary(end) {
        end -= 1;
    }

    &name.as_bytes()[..end]
}

impl TagStack {
    /// Writes the stack into `buffer`, whose length is the state capacity.
    /// Returns the number of bytes written.
    pub fn encode_into(&self, buffer: &mut [u8]) -> usize {
        if buffer.len() < HEADER_LEN {
            trace!(@state "buffer of {} bytes can't fit the header", buffer.len());

            return 0;
        }

        let logical_count = u16::try_from(self.len()).unwrap_or(u16::MAX);
        let mut serialized_count = 0u16;
        let mut pos = HEADER_LEN;

        for tag in self.iter().take(usize::from(logical_count)) {
            let kind_id = tag.kind().id();

            match tag {
                Tag::Custom(name) => {
                    let name = truncated_name(name);
                    let record_end = pos + 2 + name.len();

                    if record_end > buffer.len() {
                        break;
                    }

                    buffer[pos] = kind_id;
                    // NOTE: the name is at most 255 bytes long after truncation.
                    buffer[pos + 1] = name.len() as u8;
                    buffer[pos + 2..record_end].copy_from_slice(name);
                    pos = record_end;
                }
                Tag::Known(_) => {
                    if pos + 1 > buffer.len() {
                        break;
                    }

                    buffer[pos] = kind_id;
                    pos += 1;
                }
            }

            serialized_count += 1;
        }

        buffer[0..2].copy_from_slice(&serialized_count.to_le_bytes());
        buffer[2..4].copy_from_slice(&logical_count.to_le_bytes());

        trace!(@state "serialized {} of {} tags in {} bytes", serialized_count, logical_count, pos);

        pos
    }

    /// Restores a stack from serialized state. An empty buffer is an empty stack.
    pub fn decode(buffer: &[u8]) -> Result<TagStack, StateDecodeError> {
        if buffer.is_empty() {
            return Ok(TagStack::default());
        }

        if buffer.len() < HEADER_LEN {
            return Err(StateDecodeError::HeaderTooShort {
                length: buffer.len(),
            });
        }

        let serialized_count = usize::from(u16::from_le_bytes([buffer[0], buffer[1]]));
        let logical_count = usize::from(u16::from_le_bytes([buffer[2], buffer[3]]));

        if serialized_count > logical_count {
            return Err(StateDecodeError::CountMismatch {
                serialized: serialized_count,
                logical: logical_count,
            });
        }

        let mut items = Vec::with_capacity(logical_count);
        let mut pos = HEADER_LEN;

        for index in 0..serialized_count {
            let truncated = move |offset| StateDecodeError::TruncatedRecord { index, offset };
            let kind_id = *buffer.get(pos).ok_or_else(|| truncated(pos))?;
            let kind = TagKind::from_id(kind_id)
                .ok_or(StateDecodeError::UnknownTagKind { index, kind_id })?;

            pos += 1;

            let tag = if kind == TagKind::Custom {
                let name_len = usize::from(*buffer.get(pos).ok_or_else(|| truncated(pos))?);
                let name_start = pos + 1;
                let name = buffer
                    .get(name_start..name_start + name_len)
                    .ok_or_else(|| truncated(name_start))?;

                pos = name_start + name_len;

                Tag::Custom(String::from_utf8_lossy(name).into_owned())
            } else {
                Tag::Known(kind)
            };

            items.push(tag);
        }

        items.resize_with(logical_count, Tag::default);

        trace!(@state "deserialized {} of {} tags", serialized_count, logical_count);

        Ok(TagStack::from_items(items))
    }
}
