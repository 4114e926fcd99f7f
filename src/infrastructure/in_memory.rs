use crate::domain::ports::ReceiptSink;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory receipt sink.
///
/// Clones share the same underlying log, so a test can keep a handle while
/// the workflow owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemoryReceiptSink {
    receipts: Arc<RwLock<Vec<Receipt>>>,
}

impl InMemoryReceiptSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn receipts(&self) -> Vec<Receipt> {
        self.receipts.read().await.clone()
    }
}

#[async_trait]
impl ReceiptSink for InMemoryReceiptSink {
    async fn append(&self, receipt: &Receipt) -> Result<()> {
        let mut receipts = self.receipts.write().await;
        receipts.push(receipt.clone());
        Ok(())
    }
}
