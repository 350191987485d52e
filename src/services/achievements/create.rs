use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AchievementService;
use crate::domain::{Semester, calculate_points};
use crate::middlewares::RequireJWT;
use crate::models::achievements::requests::{CreateAchievementRequest, NewAchievement};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::system::DynamicConfig;

pub async fn handle_create(
    service: &AchievementService,
    create_request: CreateAchievementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if create_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "成果标题不能为空",
        )));
    }

    // 1. 计分：查不到的组合按规则缺失拒绝，绝不静默按 0 分落库
    let entry = match calculate_points(
        create_request.level,
        create_request.rank,
        create_request.scope,
    ) {
        Some(entry) => entry,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PointsRuleNotFound,
                format!(
                    "计分表中没有 {} / {} / {} 的组合",
                    create_request.level, create_request.rank, create_request.scope
                ),
            )));
        }
    };

    // 2. 学期推算需要档案中的入学年份
    let profile = match storage.get_profile(student_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotFound,
                "请先完善学生档案（入学年份用于推算学期）",
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

    // 3. 由成果日期推算学期；手工覆盖受策略开关控制，默认关闭
    let semester = if let Some(ref requested) = create_request.semester {
        if !DynamicConfig::transcript_allow_semester_override().await {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "当前策略不允许手工指定学期",
            )));
        }
        match requested.parse::<Semester>() {
            Ok(semester) => semester,
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
    } else {
        match Semester::for_date(create_request.achievement_date, profile.entry_year) {
            Some(semester) => semester,
            None => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "成果日期不在四年学程范围内",
                )));
            }
        }
    };
    let academic_year = semester.academic_year(profile.entry_year);

    // 证书令牌必须指向已上传的文件
    if let Some(ref token) = create_request.certificate_token {
        match storage.get_file_by_token(token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "证书文件不存在，请先上传",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询证书文件失败: {e}"),
                    )),
                );
            }
        }
    }

    let new_achievement = NewAchievement {
        student_id,
        title: create_request.title,
        category: create_request.category,
        event_type: create_request.event_type,
        organizer: create_request.organizer,
        level: create_request.level,
        rank: create_request.rank,
        scope: create_request.scope,
        description: create_request.description,
        achievement_date: create_request.achievement_date,
        calculated_points: entry.points,
        category_code: entry.code.to_string(),
        semester: semester.to_string(),
        academic_year: academic_year.label(),
        certificate_token: create_request.certificate_token,
    };

    match storage.create_achievement(new_achievement).await {
        Ok(achievement) => {
            tracing::info!(
                "Achievement {} submitted by student {} ({} points, {})",
                achievement.id,
                student_id,
                achievement.calculated_points,
                achievement.semester
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(achievement, "成果提交成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("成果提交失败: {e}"),
            )),
        ),
    }
}
