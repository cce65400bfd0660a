// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::item::Item;
use crate::itemizer::Itemizer;

/// Reads one transaction per line: whitespace separated integer labels.
/// Blank lines are skipped. Items are returned sorted by id and deduplicated.
pub struct TransactionReader<'a, R> {
    reader: R,
    itemizer: &'a mut Itemizer,
    line: String,
    line_number: usize,
}

impl<'a, R: BufRead> TransactionReader<'a, R> {
    pub fn new(reader: R, itemizer: &'a mut Itemizer) -> TransactionReader<'a, R> {
        TransactionReader {
            reader,
            itemizer,
            line: String::new(),
            line_number: 0,
        }
    }

    fn parse_line(&mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for token in self.line.split_whitespace() {
            let label = token.parse::<i64>().map_err(|_| Error::Format {
                line: self.line_number,
                token: token.to_owned(),
            })?;
            items.push(self.itemizer.id_of(label));
        }
        Ok(items)
    }
}

impl<'a, R: BufRead> Iterator for TransactionReader<'a, R> {
    type Item = Result<Vec<Item>>;
    fn next(&mut self) -> Option<Result<Vec<Item>>> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => return Some(Err(Error::Io(err))),
            }
            self.line_number += 1;
            let mut items = match self.parse_line() {
                Ok(items) => items,
                Err(err) => return Some(Err(err)),
            };

            // Some input files have transactions with duplicates items.
            // Remove any duplicates here.
            items.sort();
            dedupe_sorted(&mut items);

            if !items.is_empty() {
                return Some(Ok(items));
            }
        }
    }
}

pub fn dedupe_sorted(v: &mut Vec<Item>) {
    let mut i = 0;
    let mut k = 0;
    while i < v.len() {
        v[k] = v[i];
        while i < v.len() && v[k] == v[i] {
            i += 1;
        }
        k += 1;
    }
    assert!(k <= v.len());
    v.truncate(k);
}
