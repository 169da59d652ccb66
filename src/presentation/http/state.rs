use crate::application::process_upload::use_case::ProcessUploadUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ProcessUploadUseCase>,
}
