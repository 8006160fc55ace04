pub mod list;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{AttendanceListParams, RecordAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    /// 按角色作用域列出考勤记录
    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        params: AttendanceListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, params).await
    }

    /// 批量登记考勤（教师点名）
    pub async fn record_attendance(
        &self,
        request: &HttpRequest,
        req: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, request, req).await
    }
}
