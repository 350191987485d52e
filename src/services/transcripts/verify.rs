use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TranscriptService;
use crate::models::transcripts::responses::TranscriptVerificationResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 公开验证入口：匿名、只读。
/// 路径提取器已做格式预检，这里只负责查库与响应组装。
pub async fn handle_verify(
    service: &TranscriptService,
    verification_code: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let transcript = match storage.get_transcript_by_code(&verification_code).await {
        Ok(Some(transcript)) if transcript.is_final => transcript,
        Ok(_) => {
            // 不存在或未终版都按无效处理，不泄露区别
            return Ok(HttpResponse::NotFound().json(ApiResponse::error(
                ErrorCode::VerificationCodeInvalid,
                TranscriptVerificationResponse::invalid(),
                "验证码无效",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成绩单失败: {e}"),
                )),
            );
        }
    };

    // 验证页展示的学生身份信息
    let profile = match storage.get_profile(transcript.student_id).await {
        Ok(profile) => profile,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询档案失败: {e}"),
                )),
            );
        }
    };

    let response = TranscriptVerificationResponse {
        valid: true,
        student_name: profile.as_ref().map(|p| p.student_name.clone()),
        registration_number: profile.as_ref().map(|p| p.registration_number.clone()),
        school: profile.as_ref().map(|p| p.school.clone()),
        program: profile.as_ref().map(|p| p.program.clone()),
        semester: transcript.semester.clone(),
        academic_year: transcript.academic_year.clone(),
        total_points: Some(transcript.total_points),
        grade: Some(transcript.grade.clone()),
        achievements: Some(transcript.achievements.clone()),
        generated_at: Some(transcript.created_at),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "验证通过")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::models::{
        achievements::{
            entities::{Achievement, AchievementStatus},
            requests::{AchievementListQuery, NewAchievement},
            responses::{AchievementListResponse, AchievementStatsResponse},
        },
        files::entities::File,
        profiles::{entities::StudentProfile, requests::UpsertProfileRequest},
        system::entities::{SettingValueType, SystemSetting},
        transcripts::{
            entities::Transcript,
            requests::{NewTranscript, TranscriptListQuery},
            responses::TranscriptListResponse,
        },
        users::{
            entities::User,
            requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
            responses::UserListResponse,
        },
    };
    use crate::storage::Storage;
    use actix_web::{http::StatusCode, test::TestRequest, web};
    use std::sync::Arc;

    /// 只存一条成绩单的内存存储，其余方法不会被验证路径触达
    struct SingleTranscriptStorage {
        transcript: Transcript,
    }

    #[async_trait::async_trait]
    impl Storage for SingleTranscriptStorage {
        async fn get_transcript_by_code(&self, code: &str) -> Result<Option<Transcript>> {
            Ok((self.transcript.verification_code == code).then(|| self.transcript.clone()))
        }

        async fn get_profile(&self, _user_id: i64) -> Result<Option<StudentProfile>> {
            Ok(None)
        }

        async fn create_user(&self, _user: CreateUserRequest) -> Result<User> {
            unimplemented!()
        }
        async fn get_user_by_id(&self, _id: i64) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn get_user_by_username_or_email(&self, _identifier: &str) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn list_users_with_pagination(
            &self,
            _query: UserListQuery,
        ) -> Result<UserListResponse> {
            unimplemented!()
        }
        async fn update_user(&self, _id: i64, _update: UpdateUserRequest) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn delete_user(&self, _id: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn update_last_login(&self, _id: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn count_users(&self) -> Result<u64> {
            unimplemented!()
        }
        async fn upsert_profile(
            &self,
            _user_id: i64,
            _profile: UpsertProfileRequest,
        ) -> Result<StudentProfile> {
            unimplemented!()
        }
        async fn get_profile_by_registration(
            &self,
            _registration_number: &str,
        ) -> Result<Option<StudentProfile>> {
            unimplemented!()
        }
        async fn create_achievement(&self, _achievement: NewAchievement) -> Result<Achievement> {
            unimplemented!()
        }
        async fn get_achievement_by_id(&self, _id: i64) -> Result<Option<Achievement>> {
            unimplemented!()
        }
        async fn list_achievements_with_pagination(
            &self,
            _query: AchievementListQuery,
        ) -> Result<AchievementListResponse> {
            unimplemented!()
        }
        async fn list_achievements_for_transcript(
            &self,
            _student_id: i64,
            _semester: Option<&str>,
            _category: Option<&str>,
        ) -> Result<Vec<Achievement>> {
            unimplemented!()
        }
        async fn update_achievement_review(
            &self,
            _id: i64,
            _status: AchievementStatus,
            _remark: Option<String>,
            _reviewer_id: i64,
        ) -> Result<Option<Achievement>> {
            unimplemented!()
        }
        async fn delete_achievement(&self, _id: i64) -> Result<bool> {
            unimplemented!()
        }
        async fn achievement_stats(&self, _student_id: i64) -> Result<AchievementStatsResponse> {
            unimplemented!()
        }
        async fn create_transcript(&self, _transcript: NewTranscript) -> Result<Transcript> {
            unimplemented!()
        }
        async fn get_transcript_by_id(&self, _id: i64) -> Result<Option<Transcript>> {
            unimplemented!()
        }
        async fn list_transcripts_with_pagination(
            &self,
            _query: TranscriptListQuery,
        ) -> Result<TranscriptListResponse> {
            unimplemented!()
        }
        async fn upload_file(
            &self,
            _download_token: &str,
            _file_name: &str,
            _file_size: &i64,
            _file_type: &str,
            _user_id: i64,
        ) -> Result<File> {
            unimplemented!()
        }
        async fn get_file_by_token(&self, _token: &str) -> Result<Option<File>> {
            unimplemented!()
        }
        async fn list_all_settings(&self) -> Result<Vec<SystemSetting>> {
            unimplemented!()
        }
        async fn get_setting_by_key(&self, _key: &str) -> Result<Option<SystemSetting>> {
            unimplemented!()
        }
        async fn update_setting(
            &self,
            _key: &str,
            _value: &str,
            _user_id: i64,
        ) -> Result<SystemSetting> {
            unimplemented!()
        }
        async fn ensure_setting(
            &self,
            _key: &str,
            _value: &str,
            _value_type: SettingValueType,
            _description: &str,
        ) -> Result<()> {
            unimplemented!()
        }
    }

    const CODE: &str = "BA-TR-2025-21L31A0501-SEM3-A1B2C3";

    fn stored_transcript(is_final: bool) -> Transcript {
        Transcript {
            id: 1,
            student_id: 7,
            semester: Some("Sem-3".to_string()),
            academic_year: Some("2024-25".to_string()),
            total_points: 120,
            grade: "B+".to_string(),
            verification_code: CODE.to_string(),
            achievements: vec![],
            is_final,
            generated_by: 7,
            created_at: chrono::Utc::now(),
        }
    }

    async fn verify_with(transcript: Transcript, code: &str) -> HttpResponse {
        let storage: Arc<dyn Storage> = Arc::new(SingleTranscriptStorage { transcript });
        let request = TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();
        let service = TranscriptService::new_lazy();
        handle_verify(&service, code.to_string(), &request)
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn final_transcript_verifies() {
        let response = verify_with(stored_transcript(true), CODE).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn non_final_transcript_reports_invalid_code() {
        // 未终版的记录不得通过公开验证入口泄露
        let response = verify_with(stored_transcript(false), CODE).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_code_reports_invalid_code() {
        let response = verify_with(stored_transcript(true), "BA-TR-2025-21L31A0501-SEM3-ZZZZZZ").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
