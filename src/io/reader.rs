/*! Gold dataset reader.

One [Document] per line, in file order.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use crate::doc::Document;
use crate::error::Error;

/// Line-oriented reader over a gold dataset.
#[derive(Debug)]
pub struct Reader<T>
where
    T: Read,
{
    lines: Lines<BufReader<T>>,
}

pub type GoldReader = Reader<File>;

impl GoldReader {
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
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };

        Some(serde_json::from_str::<Document>(&line).map_err(Error::Serde))
    }
}

/// Materialize the whole dataset, preserving file order.
pub fn load_gold(src: &Path) -> Result<Vec<Document>, Error> {
    GoldReader::from_path(src)?.collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn gen_data() -> String {
        let doc = r#"{"doc_key":"doc0","sentences":[["a","b"],["c"]],"ner":[[],[]]}"#;
        let mut ret = String::new();
        for _ in 0..5 {
            ret.push_str(doc);
            ret.push('\n');
        }
        ret
    }

    #[test]
    fn reads_in_order() {
        let reader = Reader::new(Cursor::new(gen_data()));
        let docs: Result<Vec<_>, _> = reader.collect();
        let docs = docs.unwrap();
        assert_eq!(docs.len(), 5);
        assert_eq!(docs[0].doc_key(), "doc0");
        assert_eq!(docs[0].sentence_lengths(), vec![2, 1]);
    }

    #[test]
    fn missing_doc_key_is_an_error() {
        let reader = Reader::new(Cursor::new(r#"{"sentences":[["a"]]}"#.to_string() + "\n"));
        let docs: Vec<_> = reader.collect();
        assert!(matches!(docs[0], Err(Error::Serde(_))));
    }
}
