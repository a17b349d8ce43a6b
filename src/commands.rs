use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::api::ApiClient;
use crate::compose::compose;
use crate::decode::decode_payload;
use crate::error::Error;
use crate::models::{CommandRequest, OUTPUT_FILE_NAME, RawPayload};
use crate::resolver::{resolve, stems};

pub const SUCCESS_MESSAGE: &str = ".gitignore file created successfully!";
pub const LANGUAGES_HEADER: &str = "Available languages:";

/// Runs one parsed request to completion.
pub async fn run(
    client: &ApiClient,
    request: &CommandRequest,
    out: &mut impl Write,
) -> Result<()> {
    match request {
        CommandRequest::Generate {
            language,
            no_credits,
            output_dir,
        } => {
            generate(client, language, *no_credits, output_dir, out).await?;
        }
        CommandRequest::ListLanguages => list_languages(client, out).await?,
    }
    Ok(())
}

/// Resolves `language`, downloads its template and writes `<output_dir>/.gitignore`.
///
/// Nothing touches the filesystem until the final write.
pub async fn generate(
    client: &ApiClient,
    language: &str,
    no_credits: bool,
    output_dir: &Path,
    out: &mut impl Write,
) -> Result<PathBuf> {
    if language.trim().is_empty() {
        return Err(Error::Validation { field: "language" }.into());
    }

    let content = fetch_gitignore(client, language)
        .await
        .context("error fetching gitignore content")?;
    let content = compose(content, no_credits);

    let path = output_dir.join(OUTPUT_FILE_NAME);
    std::fs::write(&path, &content).map_err(|source| Error::Filesystem {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote template");

    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(path)
}

/// Listing, resolution, fetch and decode for a single language.
async fn fetch_gitignore(client: &ApiClient, language: &str) -> crate::error::Result<RawPayload> {
    let catalog = client.list_entries().await?;
    let resolved = resolve(language, &catalog)?;
    let body = client.fetch_by_exact_name(&resolved.file_name()).await?;
    Ok(decode_payload(&body)?)
}

/// Prints every template stem in upstream order.
pub async fn list_languages(client: &ApiClient, out: &mut impl Write) -> Result<()> {
    let catalog = client
        .list_entries()
        .await
        .context("error fetching languages")?;

    writeln!(out, "{LANGUAGES_HEADER}")?;
    for stem in stems(&catalog) {
        writeln!(out, "{stem}")?;
    }
    Ok(())
}
