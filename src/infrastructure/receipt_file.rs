use crate::domain::ports::ReceiptSink;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Appends rendered receipt blocks to a text file.
///
/// The file is opened in append mode on every call (created if absent, never
/// truncated) and released before the call returns. Open and write failures
/// surface as the ordinary I/O error kind.
#[derive(Debug, Clone)]
pub struct FileReceiptSink {
    path: PathBuf,
}

impl FileReceiptSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReceiptSink for FileReceiptSink {
    async fn append(&self, receipt: &Receipt) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(receipt.render().as_bytes()).await?;
        file.flush().await?;

        info!("Payment receipt logged to file: {}", self.path.display());
        Ok(())
    }
}
