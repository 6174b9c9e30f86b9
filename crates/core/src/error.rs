#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid {kind}: {value:?}")]
    InvalidValue { kind: &'static str, value: String },
}
