// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generation of table identifiers.

/// Monotonic source of identifiers for one table.
///
/// Identifiers start at 0 and grow by one on every allocation, so a table fed exclusively by a
/// sequence holds a contiguous range of identifiers.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    /// Identifier to hand out on the next allocation.
    next: u64,
}

impl IdSequence {
    /// Allocates the next identifier in the sequence.
    pub(crate) fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let mut ids = IdSequence::default();
        assert_eq!(0, ids.next_id());
    }

    #[test]
    fn test_no_gaps_and_no_reuse() {
        let mut ids = IdSequence::default();
        let allocated = (0..100).map(|_| ids.next_id()).collect::<Vec<u64>>();
        assert_eq!((0..100).collect::<Vec<u64>>(), allocated);
    }

    #[test]
    fn test_sequences_are_independent() {
        let mut items = IdSequence::default();
        let mut carts = IdSequence::default();
        assert_eq!(0, items.next_id());
        assert_eq!(1, items.next_id());
        assert_eq!(0, carts.next_id());
        assert_eq!(2, items.next_id());
        assert_eq!(1, carts.next_id());
    }
}
