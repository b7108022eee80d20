//! # Queue Types
//!
//! `QueueType` is a closed set of scheduling disciplines. The canonical
//! names (`FIFO`, `LIFO`, `PRIORITY`, `ROUND_ROBIN`) are the only text
//! form: `Display`, `FromStr` and the JSON codec all use them, and decoding
//! an unknown name is an error rather than a fallback variant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduling discipline of a work queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueType {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Highest priority first.
    Priority,
    /// Rotate between producers.
    RoundRobin,
}

/// Error returned when a string is not a canonical queue type name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseQueueTypeError {
    /// The name matches no queue type.
    #[error("invalid queue type: {0}")]
    Unknown(String),
}

impl QueueType {
    /// Every queue type, in declaration order.
    pub const ALL: [QueueType; 4] = [Self::Fifo, Self::Lifo, Self::Priority, Self::RoundRobin];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lifo => "LIFO",
            Self::Priority => "PRIORITY",
            Self::RoundRobin => "ROUND_ROBIN",
        }
    }

    /// Parse a canonical name. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// [`ParseQueueTypeError::Unknown`] for any other string.
    pub fn parse(s: &str) -> Result<Self, ParseQueueTypeError> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| ParseQueueTypeError::Unknown(s.to_string()))
    }
}

impl std::str::FromStr for QueueType {
    type Err = ParseQueueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for QueueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process a queue of the given type, returning the status line.
pub fn process_queue(queue: QueueType) -> String {
    tracing::info!(queue = %queue, "processing queue");
    format!("Processing {queue} queue")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        let names: Vec<_> = QueueType::ALL.iter().map(QueueType::as_str).collect();
        assert_eq!(names, ["FIFO", "LIFO", "PRIORITY", "ROUND_ROBIN"]);
    }

    #[test]
    fn parse_every_name() {
        for queue in QueueType::ALL {
            assert_eq!(queue.to_string().parse::<QueueType>(), Ok(queue));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_wrong_case() {
        for input in ["", "fifo", "Round_Robin", "STACK", " FIFO"] {
            assert_eq!(
                QueueType::parse(input),
                Err(ParseQueueTypeError::Unknown(input.to_string()))
            );
        }
    }

    #[test]
    fn error_message() {
        let err = QueueType::parse("STACK").unwrap_err();
        assert_eq!(err.to_string(), "invalid queue type: STACK");
    }

    #[test]
    fn json_uses_canonical_name() {
        assert_eq!(serde_json::to_string(&QueueType::RoundRobin).unwrap(), "\"ROUND_ROBIN\"");
        let parsed: QueueType = serde_json::from_str("\"PRIORITY\"").unwrap();
        assert_eq!(parsed, QueueType::Priority);
    }

    #[test]
    fn json_rejects_unknown_and_non_string() {
        assert!(serde_json::from_str::<QueueType>("\"STACK\"").is_err());
        assert!(serde_json::from_str::<QueueType>("1").is_err());
    }

    #[test]
    fn json_inside_struct() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Worker {
            name: String,
            queue: QueueType,
        }
        let worker = Worker {
            name: "settlement".into(),
            queue: QueueType::Fifo,
        };
        let json = serde_json::to_string(&worker).unwrap();
        assert_eq!(json, r#"{"name":"settlement","queue":"FIFO"}"#);
        assert_eq!(serde_json::from_str::<Worker>(&json).unwrap(), worker);
    }

    #[test]
    fn process_queue_line() {
        assert_eq!(process_queue(QueueType::Lifo), "Processing LIFO queue");
    }
}
