/*!
# I/O Utilities for Saving Traces to CSV

This module writes a [`Trace`] as CSV. Enable via the `csv` feature.
*/

use std::error::Error;
use std::fs::File;
use std::io::Write;

use csv::Writer;

use crate::trace::Trace;

/**
Writes a trace as CSV to any writer.

The output has a header row `iteration,x,y` followed by one row per iteration.
The iteration index is written as an integer, `x` and `y` with full precision.

# Arguments

* `trace` - The trace to write.
* `writer` - Destination of the CSV text.

# Returns

Returns `Ok(())` if successful, or an error if any I/O or CSV formatting
issue occurs.
*/
pub fn write_trace_csv<W: Write>(trace: &Trace, writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(Trace::COLUMNS)?;

    for row in trace.as_array().rows() {
        let iteration = row[0] as u64;
        wtr.write_record(&[iteration.to_string(), row[1].to_string(), row[2].to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

/**
Saves a trace as a CSV file at `filename`.

# Examples

```rust
use trunc_gibbs::config::InitPolicy;
use trunc_gibbs::gibbs::GibbsSampler;
use trunc_gibbs::io::csv::save_trace_csv;

let mut sampler = GibbsSampler::new(5.0, InitPolicy::Midpoint)?.set_seed(42);
let trace = sampler.run(100)?;
save_trace_csv(&trace, "/tmp/gibbs_trace.csv")?;
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/
pub fn save_trace_csv(trace: &Trace, filename: &str) -> Result<(), Box<dyn Error>> {
    write_trace_csv(trace, File::create(filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InitPolicy;
    use crate::gibbs::GibbsSampler;
    use crate::uniform::ReplaySource;
    use csv::Reader;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_initial_row_only() {
        let sampler = GibbsSampler::new(4.0, InitPolicy::Midpoint).unwrap();
        let trace = sampler
            .run_with_source(0, ReplaySource::new(vec![]))
            .unwrap();
        let mut buf = Vec::new();
        write_trace_csv(&trace, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "iteration,x,y\n0,2,2");
    }

    #[test]
    fn test_save_trace_csv_round_trips_values() -> Result<(), Box<dyn Error>> {
        let mut sampler = GibbsSampler::new(5.0, InitPolicy::UniformRandom)?.set_seed(7);
        let trace = sampler.run(25)?;

        let file = NamedTempFile::new()?;
        let filename = file.path().to_str().unwrap();
        save_trace_csv(&trace, filename)?;
        let contents = fs::read_to_string(filename)?;

        let mut rdr = Reader::from_reader(contents.as_bytes());
        let headers = rdr.headers()?.clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["iteration", "x", "y"]);

        let records: Vec<_> = rdr.records().collect::<Result<_, _>>()?;
        assert_eq!(records.len(), 26);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record[0].parse::<u64>()?, i as u64);
            // Display for f64 is shortest round-trip, so values come back exactly.
            assert_eq!(record[1].parse::<f64>()?, trace.row(i)[1]);
            assert_eq!(record[2].parse::<f64>()?, trace.row(i)[2]);
        }
        Ok(())
    }
}
