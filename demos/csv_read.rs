//! CSV Reader Examples
//!
//! Demonstrates:
//! - Reading CSV from an in-memory string
//! - Custom dialects (tab separated, unquoted)
//! - Reading a file line by line
//! - Error reporting for malformed lines

use std::error::Error;
use std::io::Write;
use tinycsv::{CsvReader, Dialect};

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== CSV Reader Examples ===\n");

    // Example 1: In-memory text with the default dialect
    println!("1. Reading from a string...");
    {
        let text = "\"Name\",\"City\"\n\n\"Alice\", \"New York, NY\"\n\"Bob\",\"Say \\\"hi\\\"\"\n";
        let mut reader = CsvReader::from_text(text);
        for row_result in reader.rows() {
            println!("   {:?}", row_result?);
        }
        println!(
            "   Rows: {}, lines: {}",
            reader.row_count(),
            reader.line_count()
        );
    }

    // Example 2: Tab separated, single quotes
    println!("\n2. Tab separated with single quotes...");
    {
        let dialect = Dialect::builder()
            .separator('\t')
            .quote(Some('\''))
            .build()?;
        let reader = CsvReader::from_text("'id'\t'label'\n'1'\t'it\\'s'\n").dialect(dialect);
        for row_result in reader {
            println!("   {:?}", row_result?);
        }
    }

    // Example 3: Unquoted dialect, escaped separators
    println!("\n3. Unquoted dialect...");
    {
        let dialect = Dialect::builder().separator(';').quote(None).build()?;
        let fields = dialect.parse_line(r"price\;net;42;EUR", None)?;
        println!("   {:?}", fields);
    }

    // Example 4: Reading a file
    println!("\n4. Reading a file...");
    {
        let path = std::env::temp_dir().join("tinycsv_demo.csv");
        {
            let mut file = std::fs::File::create(&path)?;
            for i in 0..5 {
                writeln!(file, "\"{}\",\"row {}\"", i, i)?;
            }
        }

        let mut reader = CsvReader::open(&path)?;
        let mut count = 0;
        for row_result in reader.rows() {
            let _row = row_result?;
            count += 1;
        }
        println!("   Read {} rows from {}", count, path.display());
        std::fs::remove_file(&path).ok();
    }

    // Example 5: Malformed input
    println!("\n5. Malformed line...");
    {
        let mut reader = CsvReader::from_text("\"ok\"\n\"a\",oops\n");
        for row_result in reader.rows() {
            match row_result {
                Ok(row) => println!("   {:?}", row),
                Err(e) => println!("   Error: {}", e),
            }
        }
    }

    Ok(())
}
