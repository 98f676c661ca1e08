//! Built-in mock dataset.
//!
//! Served by the mock backend when no dataset file is configured, and used
//! as a fixture by tests across the workspace.

use crate::report::{decode_collection, TrainReport};

/// Raw JSON of the built-in dataset, shaped exactly like `GET /trainData`.
pub const MOCK_TRAIN_DATA: &str = include_str!("../data/train_data.json");

/// Decode the built-in dataset.
///
/// The embedded JSON is validated by this crate's tests, so decoding cannot
/// fail at runtime.
pub fn mock_reports() -> Vec<TrainReport> {
    decode_collection(MOCK_TRAIN_DATA.as_bytes()).expect("built-in mock dataset must be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{summarize, Summary};

    #[test]
    fn mock_dataset_decodes() {
        assert!(decode_collection(MOCK_TRAIN_DATA.as_bytes()).is_ok());
    }

    #[test]
    fn mock_dataset_summary() {
        assert_eq!(
            summarize(&mock_reports()),
            Summary {
                total: 4,
                active: 3,
                under_process: 2,
                high_priority: 1,
            }
        );
    }

    #[test]
    fn mock_dataset_keeps_media() {
        let reports = mock_reports();
        let first = &reports[0];
        assert_eq!(first.train_id, "12345");
        assert_eq!(first.media_links.images.len(), 2);
        assert_eq!(first.media_links.videos.len(), 1);
        assert_eq!(first.crack_descriptions.len(), 10);
    }
}
