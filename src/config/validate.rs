use std::time::Duration;

use flyq_protocol::force_flush_threshold;
use tracing::debug;

use super::{
    Advisory, AdvisorySink, Config, ConsumerConfig, MetadataConfig, NetConfig, ProducerConfig,
    TracingSink, DEFAULT_CLIENT_ID,
};
use crate::ConfigurationError;

// below this a consumer mostly polls empty partitions
const LOW_MAX_WAIT_TIME: Duration = Duration::from_millis(100);
const MIN_MAX_WAIT_TIME: Duration = Duration::from_millis(1);

fn ensure(holds: bool, requirement: &str) -> Result<(), ConfigurationError> {
    if holds {
        Ok(())
    } else {
        Err(ConfigurationError::new(requirement))
    }
}

fn has_sub_millisecond_part(duration: Duration) -> bool {
    duration.subsec_nanos() % 1_000_000 != 0
}

impl Config {
    /// Advisory conditions present in this configuration, in the order
    /// they are reported during validation.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut found = Vec::new();
        let threshold = force_flush_threshold();

        if self.producer.required_acks.is_deprecated() {
            found.push(Advisory::DeprecatedRequiredAcks);
        }
        if self.producer.max_message_bytes >= threshold {
            found.push(Advisory::MaxMessageBytesAboveFlushThreshold);
        }
        if self.producer.flush.bytes >= threshold {
            found.push(Advisory::FlushBytesAboveFlushThreshold);
        }
        if has_sub_millisecond_part(self.producer.timeout) {
            found.push(Advisory::ProducerTimeoutSubMillisecond);
        }
        if self.consumer.max_wait_time < LOW_MAX_WAIT_TIME {
            found.push(Advisory::ConsumerMaxWaitTimeVeryLow);
        }
        if has_sub_millisecond_part(self.consumer.max_wait_time) {
            found.push(Advisory::ConsumerMaxWaitTimeSubMillisecond);
        }
        if self.client_id == DEFAULT_CLIENT_ID {
            found.push(Advisory::DefaultClientId);
        }
        found
    }

    /// Checks the configuration, logging advisories as `warn` events.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_with(&mut TracingSink)
    }

    /// Checks the configuration and returns the first violated requirement.
    ///
    /// Every advisory is handed to `sink` before the fatal checks run, so
    /// they are reported even when validation fails. Fatal checks go
    /// namespace by namespace (net, metadata, producer, consumer, then the
    /// shared settings) and stop at the first failure.
    pub fn validate_with<S>(&self, sink: &mut S) -> Result<(), ConfigurationError>
    where
        S: AdvisorySink + ?Sized,
    {
        for advisory in self.advisories() {
            sink.advise(advisory);
        }

        self.net.validate()?;
        self.metadata.validate()?;
        self.producer.validate()?;
        self.consumer.validate()?;
        ensure(self.channel_buffer_size >= 0, "ChannelBufferSize must be >= 0")?;

        debug!(client_id = %self.client_id, "configuration validated");
        Ok(())
    }
}

// Durations cannot go negative, so the ">= 0" duration requirements need no
// check of their own.

impl NetConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ensure(self.max_open_requests > 0, "Net.MaxOpenRequests must be > 0")?;
        ensure(!self.dial_timeout.is_zero(), "Net.DialTimeout must be > 0")?;
        ensure(!self.read_timeout.is_zero(), "Net.ReadTimeout must be > 0")?;
        ensure(!self.write_timeout.is_zero(), "Net.WriteTimeout must be > 0")
    }
}

impl MetadataConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ensure(self.retry.max >= 0, "Metadata.Retry.Max must be >= 0")
    }
}

impl ProducerConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ensure(self.max_message_bytes > 0, "Producer.MaxMessageBytes must be > 0")?;
        ensure(
            self.required_acks.as_i16() >= -1,
            "Producer.RequiredAcks must be >= -1",
        )?;
        ensure(!self.timeout.is_zero(), "Producer.Timeout must be > 0")?;
        ensure(
            self.partitioner.is_some(),
            "Producer.Partitioner must not be empty",
        )?;

        let flush = &self.flush;
        ensure(flush.bytes >= 0, "Producer.Flush.Bytes must be >= 0")?;
        ensure(flush.messages >= 0, "Producer.Flush.Messages must be >= 0")?;
        ensure(flush.max_messages >= 0, "Producer.Flush.MaxMessages must be >= 0")?;
        ensure(
            flush.max_messages == 0 || flush.max_messages >= flush.messages,
            "Producer.Flush.MaxMessages must be >= Producer.Flush.Messages when set",
        )?;

        ensure(self.retry.max >= 0, "Producer.Retry.Max must be >= 0")
    }
}

impl ConsumerConfig {
    fn validate(&self) -> Result<(), ConfigurationError> {
        ensure(self.fetch.min > 0, "Consumer.Fetch.Min must be > 0")?;
        ensure(self.fetch.default > 0, "Consumer.Fetch.Default must be > 0")?;
        ensure(self.fetch.max >= 0, "Consumer.Fetch.Max must be >= 0")?;
        ensure(
            self.max_wait_time >= MIN_MAX_WAIT_TIME,
            "Consumer.MaxWaitTime must be >= 1ms",
        )
    }
}
