use crate::TruthTable;
use std::io::Write;

/// Text export formats of a `TruthTable`.
///
/// Both formats start with a header row (variable names followed by the formula text) and
/// continue with one row per valuation. Every row, including the last one, ends with `\n`.
impl TruthTable {
    /// Tab separated table with `T`/`F` cells (the clipboard format).
    pub fn to_tsv_string(&self) -> String {
        self.to_separated_string('\t', "T", "F")
    }

    /// Comma separated table with `TRUE`/`FALSE` cells.
    pub fn to_csv_string(&self) -> String {
        self.to_separated_string(',', "TRUE", "FALSE")
    }

    /// Write this table into the given `output` writer as tab separated values.
    pub fn write_as_tsv(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        output.write_all(self.to_tsv_string().as_bytes())
    }

    /// Write this table into the given `output` writer as comma separated values.
    pub fn write_as_csv(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        output.write_all(self.to_csv_string().as_bytes())
    }

    /// **(internal)** Shared implementation of the separated formats.
    fn to_separated_string(&self, separator: char, t: &str, f: &str) -> String {
        let mut result = String::new();
        for var in self.variables().variables() {
            result.push(var.name());
            result.push(separator);
        }
        result.push_str(self.formula());
        result.push('\n');
        for row in self.rows() {
            for value in row.inputs().values() {
                result.push_str(if *value { t } else { f });
                result.push(separator);
            }
            result.push_str(if row.output() { t } else { f });
            result.push('\n');
        }
        result
    }
}
