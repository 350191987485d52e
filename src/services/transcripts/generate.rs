use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;

use super::TranscriptService;
use crate::domain::{EligibilityError, Semester, TranscriptDraft, assemble_draft, check_eligibility};
use crate::errors::BAPortalError;
use crate::middlewares::RequireJWT;
use crate::models::achievements::entities::Achievement;
use crate::models::transcripts::requests::{GenerateTranscriptRequest, NewTranscript};
use crate::models::transcripts::responses::TranscriptResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::system::DynamicConfig;
use crate::utils::verify_code::generate_verification_code;

/// 验证码冲突的重试上限。随机段 36^6 种取值，连续冲突意味着别的东西坏了。
const CODE_RETRY_LIMIT: usize = 5;

pub async fn handle_generate(
    service: &TranscriptService,
    generate_request: GenerateTranscriptRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 1. 档案必须存在且完整（身份信息进入 PDF 页眉）
    let profile = match storage.get_profile(student_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotFound,
                "请先完善学生档案",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询档案失败: {e}"),
                )),
            );
        }
    };
    if !profile.is_complete() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfileIncomplete,
            "学生档案不完整，无法生成成绩单",
        )));
    }

    // 2. 目标学期（None 表示全学期汇总）
    let semester = match generate_request.semester.as_deref() {
        Some(label) => match label.parse::<Semester>() {
            Ok(semester) => Some(semester),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        },
        None => None,
    };
    let semester_label = semester.map(|s| s.to_string());
    let academic_year = derived_academic_year(semester, profile.entry_year);

    // 3. 范围内的全部成果记录
    let achievements = match storage
        .list_achievements_for_transcript(student_id, semester_label.as_deref(), None)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询成果记录失败: {e}"),
                )),
            );
        }
    };

    // 4. 资格校验 + 草稿组装，粒度由策略决定
    let draft = match build_draft(&achievements).await {
        Ok(draft) => draft,
        Err(err) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TranscriptNotEligible,
                format!("不满足成绩单生成条件: {err}"),
            )));
        }
    };

    // 5. 签发：验证码冲突时重新生成（唯一索引兜底）
    let issue_year = chrono::Utc::now().year();
    for attempt in 0..CODE_RETRY_LIMIT {
        let verification_code = generate_verification_code(
            &config.transcript.code_prefix,
            issue_year,
            &profile.registration_number,
            semester_label.as_deref(),
        );

        let new_transcript = NewTranscript {
            student_id,
            semester: semester_label.clone(),
            academic_year: academic_year.clone(),
            total_points: draft.total_points,
            grade: draft.grade.to_string(),
            verification_code,
            achievements: draft.achievements.clone(),
            generated_by: student_id,
        };

        match storage.create_transcript(new_transcript).await {
            Ok(transcript) => {
                tracing::info!(
                    "Transcript {} issued for student {} ({}, {} points, grade {})",
                    transcript.id,
                    student_id,
                    semester_label.as_deref().unwrap_or("All Semesters"),
                    transcript.total_points,
                    transcript.grade
                );
                let verify_url = transcript.verify_url(&config.transcript.verify_base_url);
                return Ok(HttpResponse::Created().json(ApiResponse::success(
                    TranscriptResponse {
                        transcript,
                        verify_url,
                    },
                    "成绩单生成成功",
                )));
            }
            Err(BAPortalError::VerificationCodeConflict(_)) => {
                tracing::warn!(
                    "Verification code collision for student {student_id}, retry {}",
                    attempt + 1
                );
                continue;
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("成绩单落库失败: {e}"),
                    )),
                );
            }
        }
    }

    Ok(
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::VerificationCodeConflict,
            "验证码持续冲突，请稍后重试",
        )),
    )
}

/// 学年标签一律由学期与入学年份还原，不接受客户端提交的值。
/// 成绩单一经签发不可变更且对外可验证，学年必须与档案一致。
/// 全学期汇总没有单一学年，返回 None。
fn derived_academic_year(semester: Option<Semester>, entry_year: i32) -> Option<String> {
    semester.map(|s| s.academic_year(entry_year).label())
}

/// 按策略粒度组装草稿。
///
/// - `semester`（默认）：范围内全部记录整体校验；
/// - `semester_category`：按类别分组独立校验，未通过的类别整组剔除，
///   只要有一个类别通过即可生成。
async fn build_draft(achievements: &[Achievement]) -> Result<TranscriptDraft, EligibilityError> {
    let scope = DynamicConfig::transcript_eligibility_scope().await;
    if scope != "semester_category" {
        return assemble_draft(achievements);
    }

    let mut groups: BTreeMap<&str, Vec<Achievement>> = BTreeMap::new();
    for achievement in achievements {
        groups
            .entry(achievement.category.as_str())
            .or_default()
            .push(achievement.clone());
    }

    let mut eligible: Vec<Achievement> = Vec::new();
    for (_, group) in groups {
        if check_eligibility(&group).is_ok() {
            eligible.extend(group);
        }
    }

    if eligible.is_empty() {
        // 整体原因：没有任何类别达标
        return check_eligibility(achievements).and_then(|_| assemble_draft(achievements));
    }
    assemble_draft(&eligible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn academic_year_comes_from_entry_year() {
        let sem1 = "Sem-1".parse::<Semester>().unwrap();
        let sem3 = "Sem-3".parse::<Semester>().unwrap();
        assert_eq!(
            derived_academic_year(Some(sem1), 2023),
            Some("2023-24".to_string())
        );
        assert_eq!(
            derived_academic_year(Some(sem3), 2023),
            Some("2024-25".to_string())
        );
        // 全学期汇总没有单一学年
        assert_eq!(derived_academic_year(None, 2023), None);
    }
}
