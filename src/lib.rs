//! Client-side data models for a remote time-series storage service.
//!
//! Every wire type encodes its timestamps through [`timestamp`], which fixes
//! the textual layout to [`timestamp::ISO8601_FMT`].

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod timestamp;

pub use config::ClientConfig;
pub use error::{Result, TempoError};
pub use filter::Filter;
pub use normalize::Entity;
pub use models::{
    BulkDataSet, BulkIdPoint, BulkKeyPoint, BulkPoint, CreateSeriesRequest, DataPoint, DataSet,
    JsonCodec, Series,
};
pub use timestamp::ISO8601_FMT;
