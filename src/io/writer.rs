/*! Merged result writer.

One serialized merged result per line. The underlying handle lives for the
whole run and is flushed and closed when the writer drops.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Error;

/// Line-oriented writer for merged results.
pub struct Writer<W>
where
    W: Write,
{
    handle: BufWriter<W>,
}

pub type ResultWriter = Writer<File>;

impl ResultWriter {
    pub fn to_path(dst: &Path) -> Result<Self, Error> {
        let handle = File::create(dst)?;
        Ok(Self {
            handle: BufWriter::new(handle),
        })
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    pub fn new(dst: W) -> Self {
        Self {
            handle: BufWriter::new(dst),
        }
    }

    pub fn write(&mut self, res: &Map<String, Value>) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, res)?;
        self.handle.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}
