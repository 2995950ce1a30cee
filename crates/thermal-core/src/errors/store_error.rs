/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("message not found: {id}")]
    MessageNotFound { id: String },
}
