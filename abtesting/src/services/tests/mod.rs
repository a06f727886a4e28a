//! Service tests for the A/B testing client
