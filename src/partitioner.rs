//! Partition selection for produced records.
//!
//! A [`ProducerConfig`](crate::ProducerConfig) names one of the strategies
//! in [`PartitionerStrategy`]; the producer builds a fresh partitioner from
//! it for every topic it writes to.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionerError {
    #[error("Topic has no partitions")]
    NoPartitions,

    #[error("Partition {partition} out of range, topic has {num_partitions}")]
    InvalidPartition { partition: u32, num_partitions: u32 },
}

/// What a partitioner gets to look at for one record.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionRequest<'a> {
    pub key: Option<&'a [u8]>,
    /// Partition asked for by the caller, only honoured by the manual
    /// strategy.
    pub partition: u32,
}

pub trait Partitioner: Send {
    fn partition(
        &mut self,
        request: &PartitionRequest<'_>,
        num_partitions: u32,
    ) -> Result<u32, PartitionerError>;

    /// Whether equal requests always land on the same partition. Producers
    /// must not re-partition a retried record when this holds.
    fn requires_consistency(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionerStrategy {
    /// Hash of the key; keyless records are spread round robin.
    #[default]
    Hash,
    RoundRobin,
    /// Use the partition the caller put on the record.
    Manual,
}

impl PartitionerStrategy {
    pub fn new_partitioner(self) -> Box<dyn Partitioner> {
        match self {
            PartitionerStrategy::Hash => Box::new(HashPartitioner::default()),
            PartitionerStrategy::RoundRobin => Box::new(RoundRobinPartitioner::default()),
            PartitionerStrategy::Manual => Box::new(ManualPartitioner),
        }
    }
}

fn ensure_partitions(num_partitions: u32) -> Result<(), PartitionerError> {
    if num_partitions == 0 {
        return Err(PartitionerError::NoPartitions);
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct RoundRobinPartitioner {
    next_partition: u32,
}

impl Partitioner for RoundRobinPartitioner {
    fn partition(
        &mut self,
        _request: &PartitionRequest<'_>,
        num_partitions: u32,
    ) -> Result<u32, PartitionerError> {
        ensure_partitions(num_partitions)?;
        // partition count may have shrunk since the last call
        let partition = self.next_partition % num_partitions;
        self.next_partition = (partition + 1) % num_partitions;
        Ok(partition)
    }

    fn requires_consistency(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct HashPartitioner {
    fallback: RoundRobinPartitioner,
}

impl HashPartitioner {
    pub fn hash_key_to_partition(key: &[u8], num_partitions: u32) -> u32 {
        let hash = xxh3_64(key);
        (hash as u32) % num_partitions
    }
}

impl Partitioner for HashPartitioner {
    fn partition(
        &mut self,
        request: &PartitionRequest<'_>,
        num_partitions: u32,
    ) -> Result<u32, PartitionerError> {
        ensure_partitions(num_partitions)?;
        match request.key {
            Some(key) => Ok(Self::hash_key_to_partition(key, num_partitions)),
            None => self.fallback.partition(request, num_partitions),
        }
    }

    fn requires_consistency(&self) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub struct ManualPartitioner;

impl Partitioner for ManualPartitioner {
    fn partition(
        &mut self,
        request: &PartitionRequest<'_>,
        num_partitions: u32,
    ) -> Result<u32, PartitionerError> {
        ensure_partitions(num_partitions)?;
        if request.partition >= num_partitions {
            return Err(PartitionerError::InvalidPartition {
                partition: request.partition,
                num_partitions,
            });
        }
        Ok(request.partition)
    }

    fn requires_consistency(&self) -> bool {
        true
    }
}
