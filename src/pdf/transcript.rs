use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect, Rgb,
    path::PaintMode,
};
use qrcode::{Color as QrColor, EcLevel, QrCode};

use crate::errors::{BAPortalError, Result};
use crate::models::transcripts::entities::{Transcript, TranscriptAchievement};

// A4 版面常量（单位 mm）
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const HEADER_HEIGHT: f32 = 30.0;
const ROW_HEIGHT: f32 = 8.0;
const TABLE_BOTTOM_LIMIT: f32 = 40.0;
const QR_SIZE: f32 = 30.0;

// 表格列 x 坐标（序号、标题、类别、级别、名次、分数）
const COLS: [f32; 7] = [15.0, 28.0, 95.0, 125.0, 150.0, 172.0, 195.0];

/// 渲染配置，取自 [transcript] 配置节。与全局配置解耦便于测试。
#[derive(Debug, Clone)]
pub struct TranscriptRenderOptions {
    pub institution_name: String,
    pub institution_subtitle: String,
    pub document_title: String,
    pub verify_base_url: String,
}

/// 成绩单页眉的学生身份信息
#[derive(Debug, Clone)]
pub struct TranscriptIdentity {
    pub student_name: String,
    pub registration_number: String,
    pub school: String,
    pub program: String,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
}

/// 成绩单渲染器。单学期与全学期汇总共用一套表格布局，
/// 区别只在页眉的范围描述。
pub struct TranscriptRenderer {
    options: TranscriptRenderOptions,
}

struct PageContext {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    cursor_y: f32,
}

impl TranscriptRenderer {
    pub fn new(options: TranscriptRenderOptions) -> Self {
        Self { options }
    }

    /// 二维码编码的验证 URL
    pub fn verify_url(&self, verification_code: &str) -> String {
        format!(
            "{}/verify-transcript/{}",
            self.options.verify_base_url, verification_code
        )
    }

    /// 渲染成绩单 PDF，返回字节流
    pub fn render(&self, identity: &TranscriptIdentity, transcript: &Transcript) -> Result<Vec<u8>> {
        let (doc, page1, layer1) =
            PdfDocument::new(&self.options.document_title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| BAPortalError::pdf_render(format!("加载内置字体失败: {e}")))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| BAPortalError::pdf_render(format!("加载内置字体失败: {e}")))?;

        let layer = doc.get_page(page1).get_layer(layer1);
        let mut ctx = PageContext {
            doc,
            layer,
            font,
            font_bold,
            cursor_y: PAGE_HEIGHT - MARGIN,
        };

        self.draw_header(&mut ctx, transcript);
        self.draw_identity_block(&mut ctx, identity);
        if transcript.semester.is_some() {
            self.draw_achievement_table(&mut ctx, &transcript.achievements);
        } else {
            // 全学期汇总：按学期分组，逐组走同一套表格例程
            for (caption, rows) in group_by_semester(&transcript.achievements) {
                self.draw_semester_caption(&mut ctx, &caption);
                self.draw_achievement_table(&mut ctx, &rows);
                ctx.cursor_y -= 4.0;
            }
        }
        self.draw_summary(&mut ctx, transcript);
        self.draw_verification(&mut ctx, transcript)?;
        self.draw_footer(&ctx);

        ctx.doc
            .save_to_bytes()
            .map_err(|e| BAPortalError::pdf_render(format!("序列化 PDF 失败: {e}")))
    }

    /// 院校抬头带 + 文档标题 + 图片占位框
    fn draw_header(&self, ctx: &mut PageContext, transcript: &Transcript) {
        // 抬头底色带
        set_fill(&ctx.layer, 0.11, 0.22, 0.45);
        ctx.layer.add_rect(
            Rect::new(
                Mm(0.0),
                Mm(PAGE_HEIGHT - HEADER_HEIGHT),
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
            )
            .with_mode(PaintMode::Fill),
        );

        set_fill(&ctx.layer, 1.0, 1.0, 1.0);
        text_centered(ctx, &self.options.institution_name, 16.0, PAGE_HEIGHT - 11.0, true);
        text_centered(
            ctx,
            &self.options.institution_subtitle,
            9.0,
            PAGE_HEIGHT - 17.0,
            false,
        );
        text_centered(ctx, &self.options.document_title, 11.0, PAGE_HEIGHT - 25.0, true);

        // 校徽（左）与学生照片（右）边框。本服务不保存任何图片资产
        // （证书也只是外部 token），这两格固定画空框，供线下盖章与贴照。
        set_fill(&ctx.layer, 0.35, 0.35, 0.35);
        stroke_rect(&ctx.layer, MARGIN, PAGE_HEIGHT - 58.0, 25.0, 25.0);
        ctx.layer.use_text(
            "SEAL",
            7.0,
            Mm(MARGIN + 8.0),
            Mm(PAGE_HEIGHT - 46.5),
            &ctx.font,
        );
        stroke_rect(&ctx.layer, PAGE_WIDTH - MARGIN - 25.0, PAGE_HEIGHT - 58.0, 25.0, 25.0);
        ctx.layer.use_text(
            "PHOTO",
            7.0,
            Mm(PAGE_WIDTH - MARGIN - 18.5),
            Mm(PAGE_HEIGHT - 46.5),
            &ctx.font,
        );

        // 范围描述
        set_fill(&ctx.layer, 0.0, 0.0, 0.0);
        let scope_line = match (&transcript.semester, &transcript.academic_year) {
            (Some(semester), Some(year)) => format!("{semester}  |  Academic Year {year}"),
            (Some(semester), None) => semester.clone(),
            _ => "All Semesters".to_string(),
        };
        text_centered(ctx, &scope_line, 10.0, PAGE_HEIGHT - 38.0, true);

        ctx.cursor_y = PAGE_HEIGHT - 64.0;
    }

    /// 学生身份键值块
    fn draw_identity_block(&self, ctx: &mut PageContext, identity: &TranscriptIdentity) {
        let mut rows: Vec<(&str, String)> = vec![
            ("Student Name", identity.student_name.clone()),
            ("Registration No.", identity.registration_number.clone()),
            ("School", identity.school.clone()),
            ("Program", identity.program.clone()),
        ];
        if let Some(father) = &identity.father_name {
            rows.push(("Father's Name", father.clone()));
        }
        if let Some(mother) = &identity.mother_name {
            rows.push(("Mother's Name", mother.clone()));
        }

        set_fill(&ctx.layer, 0.0, 0.0, 0.0);
        for (label, value) in rows {
            ctx.layer.use_text(
                format!("{label}:"),
                9.0,
                Mm(MARGIN + 30.0),
                Mm(ctx.cursor_y),
                &ctx.font_bold,
            );
            ctx.layer.use_text(
                value,
                9.0,
                Mm(MARGIN + 70.0),
                Mm(ctx.cursor_y),
                &ctx.font,
            );
            ctx.cursor_y -= 6.0;
        }
        ctx.cursor_y -= 4.0;
    }

    /// 分组标题（全学期汇总用）
    fn draw_semester_caption(&self, ctx: &mut PageContext, caption: &str) {
        if ctx.cursor_y < TABLE_BOTTOM_LIMIT + ROW_HEIGHT * 2.0 {
            self.new_page(ctx);
        }
        set_fill(&ctx.layer, 0.0, 0.0, 0.0);
        ctx.layer.use_text(
            caption,
            9.5,
            Mm(COLS[0]),
            Mm(ctx.cursor_y),
            &ctx.font_bold,
        );
        ctx.cursor_y -= 6.0;
    }

    /// 成果表格，超出页面时自动换页并重绘表头
    fn draw_achievement_table(&self, ctx: &mut PageContext, rows: &[TranscriptAchievement]) {
        self.draw_table_header(ctx);

        for (index, row) in rows.iter().enumerate() {
            if ctx.cursor_y < TABLE_BOTTOM_LIMIT {
                self.new_page(ctx);
                self.draw_table_header(ctx);
            }
            self.draw_table_row(ctx, index + 1, row);
        }
    }

    fn draw_table_header(&self, ctx: &mut PageContext) {
        let top = ctx.cursor_y;
        set_fill(&ctx.layer, 0.88, 0.90, 0.96);
        ctx.layer.add_rect(
            Rect::new(
                Mm(COLS[0]),
                Mm(top - ROW_HEIGHT + 2.0),
                Mm(COLS[6]),
                Mm(top + 2.0),
            )
            .with_mode(PaintMode::Fill),
        );

        set_fill(&ctx.layer, 0.0, 0.0, 0.0);
        let headers = ["S.No", "Title", "Category", "Level", "Position", "Points"];
        for (i, header) in headers.iter().enumerate() {
            ctx.layer.use_text(
                *header,
                8.0,
                Mm(COLS[i] + 1.5),
                Mm(top - 3.0),
                &ctx.font_bold,
            );
        }
        hline(&ctx.layer, COLS[0], COLS[6], top + 2.0);
        hline(&ctx.layer, COLS[0], COLS[6], top - ROW_HEIGHT + 2.0);
        ctx.cursor_y = top - ROW_HEIGHT;
    }

    fn draw_table_row(&self, ctx: &mut PageContext, serial: usize, row: &TranscriptAchievement) {
        let top = ctx.cursor_y;
        let cells = [
            serial.to_string(),
            truncate(&row.title, 42),
            truncate(&row.category, 18),
            truncate(&row.level, 14),
            truncate(&row.rank, 12),
            row.points.to_string(),
        ];
        for (i, cell) in cells.iter().enumerate() {
            ctx.layer.use_text(
                cell.clone(),
                8.0,
                Mm(COLS[i] + 1.5),
                Mm(top - 3.0),
                &ctx.font,
            );
        }
        hline(&ctx.layer, COLS[0], COLS[6], top - ROW_HEIGHT + 2.0);
        ctx.cursor_y = top - ROW_HEIGHT;
    }

    /// 总分与等级
    fn draw_summary(&self, ctx: &mut PageContext, transcript: &Transcript) {
        if ctx.cursor_y < TABLE_BOTTOM_LIMIT + 15.0 {
            self.new_page(ctx);
        }
        ctx.cursor_y -= 8.0;

        set_fill(&ctx.layer, 0.11, 0.22, 0.45);
        ctx.layer.add_rect(
            Rect::new(
                Mm(COLS[0]),
                Mm(ctx.cursor_y - 4.0),
                Mm(COLS[6]),
                Mm(ctx.cursor_y + 8.0),
            )
            .with_mode(PaintMode::Fill),
        );
        set_fill(&ctx.layer, 1.0, 1.0, 1.0);
        ctx.layer.use_text(
            format!("Total Points: {}", transcript.total_points),
            11.0,
            Mm(COLS[0] + 4.0),
            Mm(ctx.cursor_y),
            &ctx.font_bold,
        );
        ctx.layer.use_text(
            format!("Grade: {}", transcript.grade),
            11.0,
            Mm(COLS[6] - 40.0),
            Mm(ctx.cursor_y),
            &ctx.font_bold,
        );
        ctx.cursor_y -= 14.0;
    }

    /// 二维码与验证码明文
    fn draw_verification(&self, ctx: &mut PageContext, transcript: &Transcript) -> Result<()> {
        if ctx.cursor_y < QR_SIZE + 20.0 {
            self.new_page(ctx);
        }

        let url = self.verify_url(&transcript.verification_code);
        let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)
            .map_err(|e| BAPortalError::pdf_render(format!("二维码生成失败: {e}")))?;

        let modules = code.to_colors();
        let width = code.width();
        let module_size = QR_SIZE / width as f32;
        let origin_x = MARGIN;
        let origin_y = ctx.cursor_y - QR_SIZE;

        // 深色模块画成实心矩形，浅色留白
        set_fill(&ctx.layer, 0.0, 0.0, 0.0);
        for (i, module) in modules.iter().enumerate() {
            if *module == QrColor::Dark {
                let col = i % width;
                let row = i / width;
                let x = origin_x + col as f32 * module_size;
                // 二维码行从上往下，PDF 坐标从下往上
                let y = origin_y + (width - 1 - row) as f32 * module_size;
                ctx.layer.add_rect(
                    Rect::new(Mm(x), Mm(y), Mm(x + module_size), Mm(y + module_size))
                        .with_mode(PaintMode::Fill),
                );
            }
        }

        ctx.layer.use_text(
            "Verification Code:",
            9.0,
            Mm(origin_x + QR_SIZE + 8.0),
            Mm(ctx.cursor_y - 10.0),
            &ctx.font_bold,
        );
        ctx.layer.use_text(
            transcript.verification_code.clone(),
            9.0,
            Mm(origin_x + QR_SIZE + 8.0),
            Mm(ctx.cursor_y - 16.0),
            &ctx.font,
        );
        ctx.layer.use_text(
            "Scan the QR code or visit the URL to verify this transcript.",
            7.5,
            Mm(origin_x + QR_SIZE + 8.0),
            Mm(ctx.cursor_y - 23.0),
            &ctx.font,
        );
        ctx.layer.use_text(
            format!(
                "Generated on {}",
                transcript.created_at.format("%Y-%m-%d %H:%M UTC")
            ),
            7.5,
            Mm(origin_x + QR_SIZE + 8.0),
            Mm(ctx.cursor_y - 29.0),
            &ctx.font,
        );

        ctx.cursor_y = origin_y - 8.0;
        Ok(())
    }

    /// 免签声明页脚
    fn draw_footer(&self, ctx: &PageContext) {
        set_fill(&ctx.layer, 0.35, 0.35, 0.35);
        ctx.layer.use_text(
            "This is a system-generated document and does not require a physical signature.",
            7.5,
            Mm(MARGIN + 25.0),
            Mm(10.0),
            &ctx.font,
        );
    }

    fn new_page(&self, ctx: &mut PageContext) {
        let (page, layer) = ctx.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        ctx.layer = ctx.doc.get_page(page).get_layer(layer);
        ctx.cursor_y = PAGE_HEIGHT - MARGIN;
    }
}

fn set_fill(layer: &PdfLayerReference, r: f32, g: f32, b: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

fn stroke_rect(layer: &PdfLayerReference, x: f32, y: f32, width: f32, height: f32) {
    layer.add_rect(
        Rect::new(Mm(x), Mm(y), Mm(x + width), Mm(y + height)).with_mode(PaintMode::Stroke),
    );
}

fn hline(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y)), false),
            (Point::new(Mm(x2), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// 近似居中的起笔 x 坐标（Helvetica 平均字宽约 0.5em）。
/// 按字符数而非字节数估宽，多字节字符不会把文本挤向左边。
fn centered_x(text: &str, size: f32) -> f32 {
    let approx_width_mm = text.chars().count() as f32 * size * 0.5 * 0.3528;
    ((PAGE_WIDTH - approx_width_mm) / 2.0).max(MARGIN)
}

fn text_centered(ctx: &PageContext, text: &str, size: f32, y: f32, bold: bool) {
    let font = if bold { &ctx.font_bold } else { &ctx.font };
    ctx.layer.use_text(text, size, Mm(centered_x(text, size)), Mm(y), font);
}

/// 按学期归组，保持 Sem-1..Sem-8 顺序
fn group_by_semester(
    rows: &[TranscriptAchievement],
) -> Vec<(String, Vec<TranscriptAchievement>)> {
    let mut groups: Vec<(String, Vec<TranscriptAchievement>)> = Vec::new();
    let mut sorted: Vec<&TranscriptAchievement> = rows.iter().collect();
    sorted.sort_by_key(|a| {
        a.semester
            .strip_prefix("Sem-")
            .and_then(|n| n.parse::<u8>().ok())
            .unwrap_or(u8::MAX)
    });
    for row in sorted {
        let caption = format!("{} ({})", row.semester, row.academic_year);
        match groups.last_mut() {
            Some((last, bucket)) if *last == caption => bucket.push(row.clone()),
            _ => groups.push((caption, vec![row.clone()])),
        }
    }
    groups
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> TranscriptRenderOptions {
        TranscriptRenderOptions {
            institution_name: "VIGNAN'S INSTITUTE OF INFORMATION TECHNOLOGY".to_string(),
            institution_subtitle: "(Autonomous)".to_string(),
            document_title: "BEYOND ACADEMICS ACHIEVEMENT TRANSCRIPT".to_string(),
            verify_base_url: "https://example.edu".to_string(),
        }
    }

    fn identity() -> TranscriptIdentity {
        TranscriptIdentity {
            student_name: "Test Student".to_string(),
            registration_number: "21L31A0501".to_string(),
            school: "School of Engineering".to_string(),
            program: "B.Tech CSE".to_string(),
            father_name: Some("Father Name".to_string()),
            mother_name: None,
        }
    }

    fn transcript(rows: usize) -> Transcript {
        let achievements = (0..rows)
            .map(|i| TranscriptAchievement {
                achievement_id: i as i64 + 1,
                title: format!("Achievement number {i} with a reasonably long title"),
                category: "technical".to_string(),
                level: "national".to_string(),
                rank: "winner".to_string(),
                points: 40,
                semester: "Sem-3".to_string(),
                academic_year: "2024-25".to_string(),
            })
            .collect::<Vec<_>>();
        let total: i32 = achievements.iter().map(|a| a.points).sum();
        Transcript {
            id: 1,
            student_id: 1,
            semester: Some("Sem-3".to_string()),
            academic_year: Some("2024-25".to_string()),
            total_points: total,
            grade: crate::domain::grade_for_points(total).to_string(),
            verification_code: "BA-TR-2025-21L31A0501-SEM3-A1B2C3".to_string(),
            achievements,
            is_final: true,
            generated_by: 2,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn renders_valid_pdf_bytes() {
        let renderer = TranscriptRenderer::new(options());
        let bytes = renderer.render(&identity(), &transcript(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn long_table_spills_to_extra_pages() {
        let renderer = TranscriptRenderer::new(options());
        let count_pages = |bytes: &[u8]| {
            bytes
                .windows(b"/Type /Page".len())
                .filter(|w| *w == b"/Type /Page")
                .count()
        };
        let short = renderer.render(&identity(), &transcript(3)).unwrap();
        let long = renderer.render(&identity(), &transcript(80)).unwrap();
        assert!(count_pages(&long) > count_pages(&short));
    }

    #[test]
    fn qr_encodes_only_the_verify_url() {
        let renderer = TranscriptRenderer::new(options());
        assert_eq!(
            renderer.verify_url("BA-TR-2025-21L31A0501-SEM3-A1B2C3"),
            "https://example.edu/verify-transcript/BA-TR-2025-21L31A0501-SEM3-A1B2C3"
        );
    }

    #[test]
    fn all_semesters_variant_renders() {
        let mut t = transcript(5);
        t.semester = None;
        t.academic_year = None;
        let renderer = TranscriptRenderer::new(options());
        let bytes = renderer.render(&identity(), &t).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn grouping_keeps_semester_order() {
        let mut rows = transcript(4).achievements;
        rows[0].semester = "Sem-4".to_string();
        rows[1].semester = "Sem-1".to_string();
        rows[1].academic_year = "2023-24".to_string();
        rows[2].semester = "Sem-1".to_string();
        rows[2].academic_year = "2023-24".to_string();
        rows[3].semester = "Sem-4".to_string();

        let groups = group_by_semester(&rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Sem-1 (2023-24)");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Sem-4 (2024-25)");
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn centering_counts_chars_not_bytes() {
        // 同字符数的 ASCII 与多字节文本取同一起笔位置
        assert_eq!(centered_x("ABCD", 16.0), centered_x("ΑΒΓΔ", 16.0));
        // 超长文本不越过左边距
        let long = "X".repeat(400);
        assert_eq!(centered_x(&long, 16.0), MARGIN);
    }

    #[test]
    fn empty_identity_extras_do_not_break_layout() {
        let mut id = identity();
        id.father_name = None;
        id.mother_name = None;
        let renderer = TranscriptRenderer::new(options());
        assert!(renderer.render(&id, &transcript(1)).is_ok());
    }
}
