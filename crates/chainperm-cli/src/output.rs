use std::io::{self, Write};

use chainperm_core::PermIdTable;

use crate::cli::OutputFormat;

const RIC_HEADER: &str = "RIC";
const PERMID_HEADER: &str = "PermID";

pub fn render<W: Write>(table: &PermIdTable, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Table => render_table(table, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)
        }
    }
}

fn render_table<W: Write>(table: &PermIdTable, out: &mut W) -> io::Result<()> {
    let index_width = table.len().saturating_sub(1).to_string().len().max(1);
    let ric_width = table
        .rows
        .iter()
        .map(|row| row.ric.chars().count())
        .chain(std::iter::once(RIC_HEADER.len()))
        .max()
        .unwrap_or(RIC_HEADER.len());

    writeln!(
        out,
        "{:>index_width$}  {:<ric_width$}  {}",
        "#", RIC_HEADER, PERMID_HEADER
    )?;
    for (index, row) in table.rows.iter().enumerate() {
        writeln!(
            out,
            "{:>index_width$}  {:<ric_width$}  {}",
            index, row.ric, row.perm_id
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainperm_core::PermIdRow;

    fn sample() -> PermIdTable {
        PermIdTable {
            rows: vec![
                PermIdRow::new("IBM.N", "5000001"),
                PermIdRow::new("BAD.X", "Invalid identifier"),
                PermIdRow::new("ZZZ.Z", "No PermID information"),
            ],
        }
    }

    fn rendered(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render(&sample(), format, &mut buffer).expect("render into memory");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn table_aligns_columns_in_response_order() {
        let output = rendered(OutputFormat::Table);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "#  RIC    PermID");
        assert_eq!(lines[1], "0  IBM.N  5000001");
        assert_eq!(lines[2], "1  BAD.X  Invalid identifier");
        assert_eq!(lines[3], "2  ZZZ.Z  No PermID information");
    }

    #[test]
    fn json_lists_ric_and_permid_objects() {
        let output = rendered(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

        assert_eq!(value[0]["RIC"], "IBM.N");
        assert_eq!(value[0]["PermID"], "5000001");
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn empty_table_prints_header_only() {
        let mut buffer = Vec::new();
        render(&PermIdTable::default(), OutputFormat::Table, &mut buffer).expect("render");

        assert_eq!(String::from_utf8_lossy(&buffer), "#  RIC  PermID\n");
    }
}
