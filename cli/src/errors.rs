use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Initialisation error: {0:?}")]
    InitError(#[source] anyhow::Error),

    #[error("Input error: {0:?}")]
    InputError(#[source] anyhow::Error),

    #[error("Output error: {0:?}")]
    OutputError(#[source] anyhow::Error),
}

pub const fn init_error(error: anyhow::Error) -> CliError { CliError::InitError(error) }

pub fn input_error(error: anyhow::Error) -> CliError {
    error!("Input error: {error:?}");
    CliError::InputError(error)
}

pub fn output_error(error: anyhow::Error) -> CliError {
    error!("Output error: {error:?}");
    CliError::OutputError(error)
}
