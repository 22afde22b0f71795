pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lesson_videos::requests::{CreateLessonVideoRequest, LessonVideoListParams};
use crate::storage::Storage;

pub struct LessonVideoService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonVideoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn create_lesson_video(
        &self,
        request: &HttpRequest,
        req: CreateLessonVideoRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_lesson_video(self, request, req).await
    }

    pub async fn list_lesson_videos(
        &self,
        request: &HttpRequest,
        query: LessonVideoListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_lesson_videos(self, request, query).await
    }
}
