pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web::Bytes};
use std::sync::Arc;

use crate::models::submissions::requests::SubmissionListParams;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query).await
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        body: Bytes,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, body).await
    }
}
