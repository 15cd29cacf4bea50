//! Dataset writer trait definition.

use async_trait::async_trait;

use crate::errors::ConnectorError;

/// Write-side capability the host drives.
///
/// The writer owns its target (index or partition) from open through
/// `close`; the host calls `write_row` once per row, then `close`.
#[async_trait]
pub trait DatasetWriter: Send {
    /// Write one row of positional string values.
    async fn write_row(&mut self, row: &[String]) -> Result<(), ConnectorError>;

    /// Flush buffered rows to the target.
    async fn flush(&mut self) -> Result<(), ConnectorError>;

    /// Flush remaining rows and end the session.
    async fn close(&mut self) -> Result<(), ConnectorError>;
}
