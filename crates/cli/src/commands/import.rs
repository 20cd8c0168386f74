use anyhow::{bail, Context, Result};
use ideadup_core::IdeaInput;
use std::path::Path;

use crate::{build_service, open_storage};

pub(crate) async fn run(path: &Path) -> Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let inputs = parse_jsonl(&content)?;
    if inputs.is_empty() {
        bail!("no ideas found in {}", path.display());
    }
    tracing::info!(records = inputs.len(), file = %path.display(), "Importing ideas");

    let service = build_service(open_storage().await?).await?;
    let report = service.add_ideas(&inputs).await?;
    let total = service.count_ideas().await?;
    let summary = serde_json::json!({
        "imported": inputs.len(),
        "total": total,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// One idea object per line; blank lines are skipped.
fn parse_jsonl(content: &str) -> Result<Vec<IdeaInput>> {
    let mut inputs = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let input: IdeaInput = serde_json::from_str(line)
            .with_context(|| format!("line {}: malformed idea record", index.saturating_add(1)))?;
        inputs.push(input);
    }
    Ok(inputs)
}
