use crate::shots::frequencies;
use quantum::BasisState;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn write_counts_csv(path: impl AsRef<Path>, counts: &[usize; 4]) -> io::Result<()> {
    let f = File::create(path)?;
    write_counts(BufWriter::new(f), counts)
}

pub fn write_counts<W: Write>(mut w: W, counts: &[usize; 4]) -> io::Result<()> {
    let freqs = frequencies(counts);
    writeln!(w, "basis,count,frequency")?;
    for b in BasisState::ALL {
        let i = b.index();
        writeln!(w, "{},{},{}", b.bits(), counts[i], freqs[i])?;
    }
    w.flush()
}
