use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::path::Path;

/// Write canonical records as pretty JSON, to `file` or stdout
pub async fn run_export(ctx: &AppContext, file: Option<&Path>, output: &Output) -> Result<()> {
    let records = ctx.catalog()?.all().await?;
    let content = serde_json::to_string_pretty(&records)?;

    match file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            output.success(format!("Exported {} reviews to {}", records.len(), path.display()));
        }
        None => println!("{}", content),
    }
    Ok(())
}
