use anyhow::{bail, Result};
use ideadup_service::KeywordPreview;

use crate::{build_service, open_persistent_storage};

pub(crate) async fn run_recluster() -> Result<()> {
    let service = build_service(open_persistent_storage().await?).await?;
    let report = service.process_clusters().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) async fn run_match(text: &str, top_n: Option<usize>) -> Result<()> {
    if text.trim().is_empty() {
        bail!("text to match must not be empty");
    }
    let service = build_service(open_persistent_storage().await?).await?;
    let result = service.match_idea(text, "", top_n).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn run_keywords(text: &str) -> Result<()> {
    let preview = KeywordPreview::of(text);
    println!("{}", serde_json::to_string_pretty(&preview)?);
    Ok(())
}

pub(crate) async fn run_delete(id: &str) -> Result<()> {
    let service = build_service(open_persistent_storage().await?).await?;
    if !service.delete_idea(id).await? {
        bail!("idea '{id}' not found");
    }
    println!("{}", serde_json::to_string_pretty(&serde_json::json!({"success": true, "idea_id": id}))?);
    Ok(())
}
