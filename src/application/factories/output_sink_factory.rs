use super::{EncoderFactory, EncoderType, PresenterFactory, PresenterType};
use crate::application::dto::OutputTarget;
use crate::application::use_cases::OutputSink;

/// Factory pairing an encoder with the presenter for one output target
pub struct OutputSinkFactory;

impl OutputSinkFactory {
    /// Maps a target to its encoding and destination
    pub fn types(target: OutputTarget) -> (EncoderType, PresenterType) {
        match target {
            OutputTarget::Binary(path) => (EncoderType::Protobuf, PresenterType::BinaryFile(path)),
            OutputTarget::JsonStdout => (EncoderType::Json, PresenterType::Stdout),
        }
    }

    pub fn create(target: OutputTarget) -> OutputSink {
        let (encoder_type, presenter_type) = Self::types(target);
        OutputSink::new(
            EncoderFactory::create(encoder_type),
            PresenterFactory::create(presenter_type),
        )
    }

    pub fn create_all(targets: Vec<OutputTarget>) -> Vec<OutputSink> {
        targets.into_iter().map(Self::create).collect()
    }
}
