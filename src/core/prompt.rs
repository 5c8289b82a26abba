//! Prompt Builder
//!
//! Maps a template selection to a fixed style directive and primary color,
//! and composes the natural-language instructions sent to the generation
//! service. Everything here is pure: no I/O, no configuration.

use serde_json::json;

use crate::core::event::{EventData, TemplateId, DEFAULT_TEMPLATE};

/// Property the generation service must return.
pub const PREVIEW_HTML_FIELD: &str = "previewHtml";

/// Placeholder used for optional fields the user left empty.
const EMPTY_FIELD: &str = "無";

// ============================================================================
// Template Styles
// ============================================================================

/// Style directive and primary color bound to one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateStyle {
    pub template: TemplateId,
    pub name: &'static str,
    pub instruction: &'static str,
    pub primary_color: &'static str,
}

const STYLES: [TemplateStyle; 4] = [
    TemplateStyle {
        template: TemplateId::Modern,
        name: "Medical Professional",
        instruction: "專業臨床風 (Medical Professional)：經典的醫療白與深藍配色。使用俐落的直線分割與精緻的框線包裹標題。強調邏輯性與專業信任感。",
        primary_color: "#1d4ed8",
    },
    TemplateStyle {
        template: TemplateId::Tech,
        name: "Digital Health",
        instruction: "數位醫療風 (Digital Health)：色調以科技藍、青綠色為主。使用精密網格線背景、細小的「+」字裝飾或數位脈搏線條。呈現數位轉型與尖端醫療技術的專業感。",
        primary_color: "#0d9488",
    },
    TemplateStyle {
        template: TemplateId::Elegant,
        name: "Clinical Research",
        instruction: "醫學學術風 (Clinical Research)：使用純淨白與冷色調灰色。搭配細膩的實線邊框，字體清晰且層次分明，如同國際醫學期刊般嚴謹、高雅且具權威性。",
        primary_color: "#334155",
    },
    TemplateStyle {
        template: TemplateId::Creative,
        name: "Public Health",
        instruction: "健康活力風 (Public Health)：使用溫暖的薄荷綠或淡藍色。運用柔和的圓角與流暢的曲線線條，展現公共衛生教育、身心健康的親和力與正面能量。",
        primary_color: "#10b981",
    },
];

impl TemplateStyle {
    /// Style for a known template.
    pub fn of(template: TemplateId) -> &'static TemplateStyle {
        STYLES
            .iter()
            .find(|s| s.template == template)
            .unwrap_or(&STYLES[0])
    }

    /// Style for a raw identifier; unknown identifiers get the default style.
    pub fn for_template(id: &str) -> &'static TemplateStyle {
        Self::of(TemplateId::parse(id).unwrap_or(DEFAULT_TEMPLATE))
    }

    pub fn all() -> &'static [TemplateStyle] {
        &STYLES
    }
}

// ============================================================================
// Prompt Composition
// ============================================================================

/// Compose the generation instructions for `data` in the given style.
///
/// All event fields are embedded verbatim. The registration button, inline
/// CSS requirement, font size floor and palette rules are fixed text.
pub fn build_prompt(data: &EventData, style: &TemplateStyle) -> String {
    let extra_info = data.extra_info_text().unwrap_or(EMPTY_FIELD);
    let schedule = data.schedule_text().unwrap_or(EMPTY_FIELD);
    let color = style.primary_color;

    format!(
        "請為以下活動生成一個「具備醫學專業感 (Medical Professional Style)、嚴謹且高品質」的介紹網頁：

【風格指導】
{instruction}
- **核心設計概念**：強調「信任 (Trust)」、「精確 (Precision)」與「潔淨 (Sanitary)」。
- **色彩核心**：以醫學白 (#FFFFFF) 為基調，搭配專業藍、健康綠或科研灰。絕對禁止全黑背景。

【活動基本資料】
- 主題：{topic}
- 時間：{date}
- 地點：{location}
- 講者：{speaker}
- 費用：{fee}
- 截止日期：{deadline}
- 報名連結：{reg_url}

【詳細內容】
- 核心介紹：{content}
- 補充資訊：{extra_info}
- 課程表/流程安排 (放置於最後)：{schedule}

設計與排版規範 (醫學專業級)：
1. **頂部活動主題區塊 (Hero Section)**：
   - 禁止單一顏色，禁止漸層。使用細線條、框線或極淡的心跳波形裝飾。
2. **報名按鈕 (Call to Action)**：
   - **必須生成一個顯眼的報名按鈕**。
   - 按鈕文字應為「立即線上報名」或「Secure Your Spot Now」。
   - 樣式：使用 {color} 背景、白色粗體字、圓角 (8px-12px)、較大的內邊距 (12px 30px)。
   - 按鈕應放置在內容核心介紹之後，或是網頁底部顯眼處（或兩者皆有）。
   - 使用 <a> 標籤，href 設定為 \"{reg_url}\"，並加上 target=\"_blank\"。
3. **框線與區隔美學**：
   - 使用 1px 的精緻邊框製作內容卡片，給人如同病歷般的精確感。
4. **文字與圖示**：
   - 內文最小 16px。使用醫療相關 Emoji (🩺, 📋, 👨‍⚕️)。
5. **CKEditor 複製相容性**：
   - 使用標準 HTML 標籤。所有 CSS 樣式必須以內聯 (inline-style) 方式撰寫，確保複製後在編輯器中呈現高品質的醫學專業視覺。

請回傳純 JSON 格式。",
        instruction = style.instruction,
        topic = data.topic,
        date = data.date,
        location = data.location,
        speaker = data.speaker,
        fee = data.fee,
        deadline = data.deadline,
        reg_url = data.reg_url,
        content = data.content,
    )
}

/// Structured-output schema: an object with one required string property.
pub fn preview_html_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "previewHtml": { "type": "STRING" }
        },
        "required": ["previewHtml"]
    })
}

// ============================================================================
// Generation Request
// ============================================================================

/// Provider-neutral payload: the prompt plus the schema the reply must match.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: serde_json::Value,
}

impl GenerationRequest {
    pub fn for_event(data: &EventData) -> Self {
        let style = TemplateStyle::for_template(&data.template);
        log::debug!(
            "Composing prompt for template '{}' ({})",
            style.template,
            style.name
        );
        Self {
            prompt: build_prompt(data, style),
            response_schema: preview_html_schema(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn sample_event(template: &str) -> EventData {
        EventData {
            topic: "2024 國際心血管醫學研討會".to_string(),
            date: "2024-12-15 09:00 - 17:00".to_string(),
            location: "台北榮民總醫院 致德樓".to_string(),
            content: "心臟衰竭的最新治療指引".to_string(),
            speaker: "王大明 醫師".to_string(),
            fee: "醫師 1,000 元 (含學分證明)".to_string(),
            deadline: "2024-12-01".to_string(),
            schedule: Some("09:00 報到\n09:30 開幕".to_string()),
            extra_info: None,
            template: template.to_string(),
            reg_url: "https://example.com/register?id=1&lang=zh".to_string(),
        }
    }

    #[rstest]
    #[case("modern", "Medical Professional", "#1d4ed8")]
    #[case("tech", "Digital Health", "#0d9488")]
    #[case("elegant", "Clinical Research", "#334155")]
    #[case("creative", "Public Health", "#10b981")]
    #[case("retro", "Medical Professional", "#1d4ed8")]
    #[case("", "Medical Professional", "#1d4ed8")]
    fn test_template_style_selection(
        #[case] id: &str,
        #[case] name: &str,
        #[case] color: &str,
    ) {
        let style = TemplateStyle::for_template(id);
        assert_eq!(style.name, name);
        assert_eq!(style.primary_color, color);
        assert!(style.instruction.contains(name));
    }

    #[test]
    fn test_template_styles_are_distinct() {
        let colors: HashSet<_> = TemplateStyle::all().iter().map(|s| s.primary_color).collect();
        let instructions: HashSet<_> = TemplateStyle::all().iter().map(|s| s.instruction).collect();
        assert_eq!(colors.len(), 4);
        assert_eq!(instructions.len(), 4);
    }

    #[test]
    fn test_selection_is_deterministic() {
        for id in ["modern", "tech", "elegant", "creative", "unknown"] {
            assert_eq!(TemplateStyle::for_template(id), TemplateStyle::for_template(id));
        }
    }

    #[test]
    fn test_tech_prompt_carries_only_digital_health_directive() {
        let data = sample_event("tech");
        let prompt = build_prompt(&data, TemplateStyle::for_template(&data.template));

        assert!(prompt.contains(TemplateStyle::of(TemplateId::Tech).instruction));
        assert!(prompt.contains("#0d9488"));
        for other in [TemplateId::Modern, TemplateId::Elegant, TemplateId::Creative] {
            let style = TemplateStyle::of(other);
            assert!(!prompt.contains(style.instruction), "leaked {other} directive");
            assert!(!prompt.contains(style.primary_color), "leaked {other} color");
        }
    }

    #[test]
    fn test_prompt_embeds_fields_verbatim() {
        let data = sample_event("modern");
        let prompt = build_prompt(&data, TemplateStyle::for_template("modern"));

        assert!(prompt.contains("- 主題：2024 國際心血管醫學研討會"));
        assert!(prompt.contains("- 時間：2024-12-15 09:00 - 17:00"));
        assert!(prompt.contains("- 地點：台北榮民總醫院 致德樓"));
        assert!(prompt.contains("- 講者：王大明 醫師"));
        assert!(prompt.contains("- 費用：醫師 1,000 元 (含學分證明)"));
        assert!(prompt.contains("- 截止日期：2024-12-01"));
        assert!(prompt.contains("- 核心介紹：心臟衰竭的最新治療指引"));
        assert!(prompt.contains("09:00 報到\n09:30 開幕"));
        // No escaping of URL query characters.
        assert!(prompt.contains("href 設定為 \"https://example.com/register?id=1&lang=zh\""));
    }

    #[test]
    fn test_missing_optionals_render_placeholder() {
        let mut data = sample_event("modern");
        data.schedule = Some(String::new());
        let prompt = build_prompt(&data, TemplateStyle::for_template("modern"));

        assert!(prompt.contains("- 補充資訊：無"));
        assert!(prompt.contains("- 課程表/流程安排 (放置於最後)：無"));
    }

    #[test]
    fn test_prompt_layout_directives() {
        let data = sample_event("creative");
        let prompt = build_prompt(&data, TemplateStyle::for_template("creative"));

        assert!(prompt.contains("立即線上報名"));
        assert!(prompt.contains("Secure Your Spot Now"));
        assert!(prompt.contains("使用 #10b981 背景"));
        assert!(prompt.contains("target=\"_blank\""));
        assert!(prompt.contains("inline-style"));
        assert!(prompt.contains("內文最小 16px"));
        assert!(prompt.contains("絕對禁止全黑背景"));
    }

    #[test]
    fn test_schema_requires_preview_html_string() {
        let schema = preview_html_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["previewHtml"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["previewHtml"]));
    }

    #[test]
    fn test_request_for_event_uses_event_template() {
        let request = GenerationRequest::for_event(&sample_event("elegant"));
        assert!(request.prompt.contains("#334155"));
        assert_eq!(request.response_schema, preview_html_schema());
    }
}
