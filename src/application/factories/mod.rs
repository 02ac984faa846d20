mod encoder_factory;
mod output_sink_factory;
mod presenter_factory;

pub use encoder_factory::{EncoderFactory, EncoderType};
pub use output_sink_factory::OutputSinkFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
