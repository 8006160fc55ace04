pub mod compute;
pub mod my_transcript;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct TranscriptService {
    storage: Option<Arc<dyn Storage>>,
}

impl TranscriptService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 当前学生的成绩单
    pub async fn my_transcript(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my_transcript::my_transcript(self, request).await
    }

    /// 指定学生的成绩单（教师/管理员）
    pub async fn student_transcript(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        my_transcript::student_transcript(self, request, student_id).await
    }
}
