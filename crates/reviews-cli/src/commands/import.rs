use crate::commands::AppContext;
use crate::output::{styled_table, Output};
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use comfy_table::{Attribute, Cell};
use serde_json::Value;
use std::path::Path;

/// Read a JSON array of review documents
pub fn read_documents(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    match serde_json::from_str::<Value>(&content).wrap_err_with(|| format!("{} is not valid JSON", path.display()))? {
        Value::Array(documents) => Ok(documents),
        _ => Err(eyre!("{} must contain a JSON array of reviews", path.display())),
    }
}

pub async fn run_import(ctx: &AppContext, file: &Path, output: &Output) -> Result<()> {
    let documents = read_documents(file)?;
    let catalog = ctx.catalog()?;
    let report = catalog.import(documents).await?;

    output.data(&report);

    if !report.failed.is_empty() {
        let mut table = styled_table();
        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Reason").add_attribute(Attribute::Bold),
        ]);
        for failure in &report.failed {
            table.add_row(vec![
                Cell::new(failure.index),
                Cell::new(failure.id.as_deref().unwrap_or("-")),
                Cell::new(&failure.reason),
            ]);
        }
        output.table(&table);
        output.warn(format!("{} of {} documents skipped", report.failed.len(), report.total()));
    }

    output.success(format!(
        "Imported {} reviews into {}",
        report.added.len(),
        catalog.store_name()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_documents_requires_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "Heat", "rating": 9.1}}]"#).unwrap();
        assert_eq!(read_documents(file.path()).unwrap().len(), 1);

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"title": "Heat"}}"#).unwrap();
        assert!(read_documents(file.path()).is_err());
    }
}
