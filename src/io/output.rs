use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Destination for command output: a file when given, stdout otherwise
pub fn create_writer(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

pub fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_output_ends_with_newline() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &serde_json::json!({"score": 1.5})).unwrap();
        assert!(buffer.ends_with(b"\n"));
    }
}
