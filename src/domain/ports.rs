use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only audit sink for settlement receipts.
#[async_trait]
pub trait ReceiptSink: Send + Sync {
    async fn append(&self, receipt: &Receipt) -> Result<()>;
}

pub type ReceiptSinkBox = Box<dyn ReceiptSink>;
