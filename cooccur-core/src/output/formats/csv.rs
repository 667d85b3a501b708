use std::io::Write;

use crate::report::ReportRow;
use crate::types::CooccurError;

/// Write the report in CSV format with RFC 4180 quoting
pub fn write_csv_format<W: Write>(
    writer: &mut W,
    rows: &[ReportRow],
) -> Result<(), CooccurError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Community", "Species"])?;
    for row in rows {
        csv_writer.write_record([row.community.as_str(), row.species.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_write_csv_format_rows_in_order() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let rows = vec![
            ReportRow {
                community: "community1".to_string(),
                species: "S1".to_string(),
            },
            ReportRow {
                community: "community2".to_string(),
                species: "S2".to_string(),
            },
        ];

        write_csv_format(&mut cursor, &rows).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(output, "Community,Species\ncommunity1,S1\ncommunity2,S2\n");
    }

    #[test]
    fn test_write_csv_format_quotes_awkward_identifiers() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let rows = vec![ReportRow {
            community: "community1".to_string(),
            species: "Escherichia coli, strain K12".to_string(),
        }];

        write_csv_format(&mut cursor, &rows).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "Community,Species\ncommunity1,\"Escherichia coli, strain K12\"\n"
        );
    }
}
