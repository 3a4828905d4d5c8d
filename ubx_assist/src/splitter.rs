//! Splits a raw AssistNow blob into candidate frame bodies

use crate::constants::{UBX_SYNC_MARKER, UBX_SYNC_SIZE};

/// Iterator over the candidate bodies of a byte stream.
///
/// The stream is cut at every non-overlapping occurrence of the sync marker
/// `B5 62`, scanning left to right. The marker is not part of the yielded
/// slices and empty pieces are skipped. Bytes in front of the first marker
/// are yielded like any other piece; the validator is the one to reject them.
///
/// No length field is consulted, so a payload that happens to contain
/// `B5 62` is split there as well.
#[derive(Debug, Clone)]
pub struct FrameSplitter<'a> {
    rest: &'a [u8],
}

/// Start splitting `stream` into candidate frame bodies
pub fn split_frames(stream: &[u8]) -> FrameSplitter<'_> {
    FrameSplitter { rest: stream }
}

impl<'a> FrameSplitter<'a> {
    fn find_sync(&self) -> Option<usize> {
        self.rest
            .windows(UBX_SYNC_SIZE)
            .position(|w| w == UBX_SYNC_MARKER)
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for FrameSplitter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let piece = match self.find_sync() {
                Some(pos) => {
                    let (piece, tail) = self.rest.split_at(pos);
                    self.rest = &tail[UBX_SYNC_SIZE..];
                    piece
                },
                None => std::mem::take(&mut self.rest),
            };
            if !piece.is_empty() {
                return Some(piece);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for FrameSplitter<'_> {}
