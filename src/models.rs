use std::any::type_name;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, trace};

use crate::{Result, TempoError};

/// JSON encoding shared by every wire type.
///
/// Decoding always returns a fresh value, so a failed decode never touches a
/// value the caller already holds.
pub trait JsonCodec: Serialize + DeserializeOwned {
    fn to_json(&self) -> Result<String> {
        trace!(kind = type_name::<Self>(), "encoding");
        Ok(serde_json::to_string(self)?)
    }

    fn to_json_vec(&self) -> Result<Vec<u8>> {
        trace!(kind = type_name::<Self>(), "encoding");
        Ok(serde_json::to_vec(self)?)
    }

    fn from_json(data: &str) -> Result<Self> {
        Self::from_json_slice(data.as_bytes())
    }

    fn from_json_slice(data: &[u8]) -> Result<Self> {
        trace!(kind = type_name::<Self>(), len = data.len(), "decoding");
        serde_json::from_slice(data).map_err(|e| {
            debug!(kind = type_name::<Self>(), error = %e, "failed to decode");
            TempoError::from(e)
        })
    }
}

/// Decodes `null` the same as an absent field. Peers that write empty
/// collections as `null` are accepted.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Series {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(rename = "t", with = "crate::timestamp")]
    pub ts: DateTime<Utc>,
    pub v: f64,
}

impl DataPoint {
    pub fn new(ts: DateTime<Utc>, v: f64) -> Self {
        Self { ts, v }
    }
}

/// `deny_unknown_fields` keeps an object carrying both `key` and `id` from
/// matching this variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BulkKeyPoint {
    pub key: String,
    pub v: f64,
}

impl BulkKeyPoint {
    pub fn value(&self) -> f64 {
        self.v
    }
}

/// `deny_unknown_fields` keeps an object carrying both `key` and `id` from
/// matching this variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BulkIdPoint {
    pub id: String,
    pub v: f64,
}

impl BulkIdPoint {
    pub fn value(&self) -> f64 {
        self.v
    }
}

/// A value addressed to a series either by key or by id. Exactly one of the
/// two identifiers is present on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulkPoint {
    Key(BulkKeyPoint),
    Id(BulkIdPoint),
}

impl BulkPoint {
    pub fn by_key(key: impl Into<String>, v: f64) -> Self {
        BulkPoint::Key(BulkKeyPoint { key: key.into(), v })
    }

    pub fn by_id(id: impl Into<String>, v: f64) -> Self {
        BulkPoint::Id(BulkIdPoint { id: id.into(), v })
    }

    pub fn value(&self) -> f64 {
        match self {
            BulkPoint::Key(point) => point.value(),
            BulkPoint::Id(point) => point.value(),
        }
    }
}

/// Values for several series written at a single instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDataSet {
    #[serde(rename = "t", with = "crate::timestamp")]
    pub ts: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<BulkPoint>,
}

impl BulkDataSet {
    pub fn new(ts: DateTime<Utc>) -> Self {
        Self { ts, data: Vec::new() }
    }

    pub fn push_key(&mut self, key: impl Into<String>, v: f64) -> &mut Self {
        self.data.push(BulkPoint::by_key(key, v));
        self
    }

    pub fn push_id(&mut self, id: impl Into<String>, v: f64) -> &mut Self {
        self.data.push(BulkPoint::by_id(id, v));
        self
    }
}

/// Points read back for one series between `start` and `end`, with the
/// aggregate statistics the service computed for that range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSet {
    pub series: Series,
    #[serde(with = "crate::timestamp")]
    pub start: DateTime<Utc>,
    #[serde(with = "crate::timestamp")]
    pub end: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<DataPoint>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSeriesRequest {
    pub key: String,
}

impl CreateSeriesRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl JsonCodec for Series {}
impl JsonCodec for DataPoint {}
impl JsonCodec for BulkPoint {}
impl JsonCodec for BulkDataSet {}
impl JsonCodec for DataSet {}
impl JsonCodec for CreateSeriesRequest {}
