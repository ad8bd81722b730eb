use crate::domain::model::{LoadSummary, RawRow, TransformResult};
use crate::utils::error::Result;

/// Byte-level storage access. Reads resolve the path exactly as given by
/// the caller; writes land relative to the implementation's output
/// location.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn batch_size(&self) -> usize;
    fn skip_rows(&self) -> usize;
}

/// The three pipeline stages. Everything runs synchronously to completion;
/// the full record set is materialized in memory between stages.
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<RawRow>>;
    fn transform(&self, rows: Vec<RawRow>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<LoadSummary>;
}
