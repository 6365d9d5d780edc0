use tracing::info;

use crate::{BulkDataSet, DataPoint, DataSet, JsonCodec, Result, Series};

/// Wire documents `tempo-fmt` can re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    DataPoint,
    Bulk,
    DataSet,
    Series,
}

impl Entity {
    pub const NAMES: [&'static str; 4] = ["datapoint", "bulk", "dataset", "series"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "datapoint" => Some(Entity::DataPoint),
            "bulk" => Some(Entity::Bulk),
            "dataset" => Some(Entity::DataSet),
            "series" => Some(Entity::Series),
            _ => None,
        }
    }

    /// Decodes one document and returns its canonical encoding.
    pub fn normalize(self, input: &str) -> Result<String> {
        let output = match self {
            Entity::DataPoint => reencode::<DataPoint>(input),
            Entity::Bulk => reencode::<BulkDataSet>(input),
            Entity::DataSet => reencode::<DataSet>(input),
            Entity::Series => reencode::<Series>(input),
        }?;
        info!("Normalized {:?} ({} bytes in, {} bytes out)", self, input.len(), output.len());
        Ok(output)
    }
}

fn reencode<T: JsonCodec>(input: &str) -> Result<String> {
    T::from_json(input.trim())?.to_json()
}
