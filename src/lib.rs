pub mod config;
mod error;
pub mod partitioner;

pub use config::{
    Advisory, AdvisorySink, Config, ConsumerConfig, ConsumerFetch, ConsumerReturn, ConsumerRetry,
    FnSink, MetadataConfig, MetadataRetry, NetConfig, ProducerConfig, ProducerFlush, ProducerReturn,
    ProducerRetry, TracingSink, ValidatedConfig, DEFAULT_CLIENT_ID,
};
pub use error::ConfigurationError;
pub use partitioner::{PartitionRequest, Partitioner, PartitionerError, PartitionerStrategy};

pub use flyq_protocol::{force_flush_threshold, CompressionCodec, RequiredAcks, MAX_REQUEST_SIZE};
