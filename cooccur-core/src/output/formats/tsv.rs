use std::io::Write;

use crate::report::ReportRow;
use crate::types::CooccurError;

/// Write the report in tab-separated format
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    rows: &[ReportRow],
) -> Result<(), CooccurError> {
    writeln!(writer, "Community\tSpecies")?;
    for row in rows {
        writeln!(writer, "{}\t{}", row.community, row.species)?;
    }
    Ok(())
}
