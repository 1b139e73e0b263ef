/*! Decoder dump replay.

Streams [DecodedDocument]s back out of a line-delimited JSON dump written by
the inference framework, one document per line, in the dataset's file order.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::error::Error;
use crate::model::DecodedDocument;

/// Line-oriented reader over a decoder dump.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type ReplayReader = Reader<File>;

impl ReplayReader {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        let br = BufReader::new(handle);
        Ok(Self { lines: br.lines() })
    }
}

impl<T> Reader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        Self {
            lines: BufReader::new(src).lines(),
        }
    }
}

impl<T> Iterator for Reader<T>
where
    T: Read,
{
    type Item = Result<DecodedDocument, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        Some(serde_json::from_str::<DecodedDocument>(&line).map_err(Error::Serde))
    }
}
