//! Event form state
//!
//! Field catalog, template catalog and the editable draft behind the form.

use crate::bindings::EventData;

/// Template selected when the form first opens.
pub const DEFAULT_TEMPLATE: &str = "modern";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOption {
    pub id: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEMPLATE_OPTIONS: [TemplateOption; 4] = [
    TemplateOption {
        id: "modern",
        icon: "🩺",
        name: "專業臨床",
        description: "嚴謹、信任、標準藍白",
    },
    TemplateOption {
        id: "tech",
        icon: "💻",
        name: "數位醫療",
        description: "精密、科技、青綠調",
    },
    TemplateOption {
        id: "elegant",
        icon: "🔬",
        name: "學術研究",
        description: "純粹、權威、期刊感",
    },
    TemplateOption {
        id: "creative",
        icon: "🏥",
        name: "健康教育",
        description: "親和、明亮、正向感",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
    TextArea { rows: u32 },
}

/// Every editable field of the form, keyed by its input `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Topic,
    Date,
    Location,
    Speaker,
    Content,
    Fee,
    Deadline,
    RegUrl,
    ExtraInfo,
    Schedule,
}

/// Rendering order; fields sharing a row sit side by side.
pub const FORM_ROWS: &[&[FormField]] = &[
    &[FormField::Topic],
    &[FormField::Date, FormField::Location],
    &[FormField::Speaker],
    &[FormField::Content],
    &[FormField::Fee, FormField::Deadline],
    &[FormField::RegUrl],
    &[FormField::ExtraInfo],
    &[FormField::Schedule],
];

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Topic,
        FormField::Date,
        FormField::Location,
        FormField::Speaker,
        FormField::Content,
        FormField::Fee,
        FormField::Deadline,
        FormField::RegUrl,
        FormField::ExtraInfo,
        FormField::Schedule,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FormField::Topic => "topic",
            FormField::Date => "date",
            FormField::Location => "location",
            FormField::Speaker => "speaker",
            FormField::Content => "content",
            FormField::Fee => "fee",
            FormField::Deadline => "deadline",
            FormField::RegUrl => "regUrl",
            FormField::ExtraInfo => "extraInfo",
            FormField::Schedule => "schedule",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Topic => "醫學活動主題",
            FormField::Date => "活動日期",
            FormField::Location => "活動地點",
            FormField::Speaker => "主要講者 / 特邀專家",
            FormField::Content => "活動核心介紹 (醫學背景與摘要)",
            FormField::Fee => "報名費用與學分資訊",
            FormField::Deadline => "報名截止日期",
            FormField::RegUrl => "報名連結 (URL)",
            FormField::ExtraInfo => "補充資訊 (交通指引、CME 學分等)",
            FormField::Schedule => "課程表 / 流程安排 (醫學議程)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Topic => "例如：2024 國際心血管醫學研討會",
            FormField::Date => "2024-12-15 09:00 - 17:00",
            FormField::Location => "台北榮民總醫院 致德樓...",
            FormField::Speaker => "講者姓名與學位、所屬機構",
            FormField::Content => "請描述研討會的核心議題、研究價值或臨床應用預期...",
            FormField::Fee => "例如：醫師 1,000 元 (含學分證明)",
            FormField::Deadline => "請輸入截止日期",
            FormField::RegUrl => "https://example.com/register",
            FormField::ExtraInfo => "如：提供繼續教育學分、交通接駁車時間等",
            FormField::Schedule => "請列出各時段的議程題目與主持人，AI 將以嚴謹樣式排版...",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::Content => FieldKind::TextArea { rows: 3 },
            FormField::Schedule => FieldKind::TextArea { rows: 4 },
            FormField::RegUrl => FieldKind::Url,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::ExtraInfo | FormField::Schedule)
    }
}

/// Editable form contents. Values are stored exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    data: EventData,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDraft {
    pub fn new() -> Self {
        Self {
            data: EventData {
                template: DEFAULT_TEMPLATE.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        let d = &self.data;
        match field {
            FormField::Topic => &d.topic,
            FormField::Date => &d.date,
            FormField::Location => &d.location,
            FormField::Speaker => &d.speaker,
            FormField::Content => &d.content,
            FormField::Fee => &d.fee,
            FormField::Deadline => &d.deadline,
            FormField::RegUrl => &d.reg_url,
            FormField::ExtraInfo => d.extra_info.as_deref().unwrap_or_default(),
            FormField::Schedule => d.schedule.as_deref().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let d = &mut self.data;
        match field {
            FormField::Topic => d.topic = value,
            FormField::Date => d.date = value,
            FormField::Location => d.location = value,
            FormField::Speaker => d.speaker = value,
            FormField::Content => d.content = value,
            FormField::Fee => d.fee = value,
            FormField::Deadline => d.deadline = value,
            FormField::RegUrl => d.reg_url = value,
            FormField::ExtraInfo => d.extra_info = Some(value),
            FormField::Schedule => d.schedule = Some(value),
        }
    }

    /// Update a field by its input name. Unknown names leave the draft as is.
    pub fn set_by_name(&mut self, name: &str, value: String) -> bool {
        match FormField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => {
                log::warn!("Ignoring input for unknown field '{}'", name);
                false
            }
        }
    }

    pub fn template(&self) -> &str {
        &self.data.template
    }

    pub fn select_template(&mut self, id: &str) {
        self.data.template = id.to_string();
    }

    pub fn snapshot(&self) -> EventData {
        self.data.clone()
    }
}

/// Hand the draft to `on_submit` unless a generation is already running.
pub fn submit_draft(
    draft: &EventDraft,
    is_loading: bool,
    on_submit: impl FnOnce(EventData),
) -> bool {
    if is_loading {
        log::debug!("Submit ignored while a generation is in flight");
        return false;
    }
    on_submit(draft.snapshot());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults_to_modern() {
        let draft = EventDraft::new();
        assert_eq!(draft.template(), "modern");
        assert_eq!(draft.snapshot().template, "modern");
    }

    #[test]
    fn test_set_by_name_updates_only_that_field() {
        let mut draft = EventDraft::new();
        let before = draft.snapshot();

        assert!(draft.set_by_name("topic", "Cardiology Update".to_string()));

        let after = draft.snapshot();
        assert_eq!(after.topic, "Cardiology Update");
        assert_eq!(
            EventData {
                topic: before.topic.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn test_unknown_field_name_is_ignored() {
        let mut draft = EventDraft::new();
        let before = draft.clone();
        assert!(!draft.set_by_name("bogus", "x".to_string()));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let mut draft = EventDraft::new();
        draft.set(FormField::Schedule, "  09:00 報到\n".to_string());
        draft.set(FormField::RegUrl, "https://example.com/r".to_string());
        let data = draft.snapshot();
        assert_eq!(data.schedule.as_deref(), Some("  09:00 報到\n"));
        assert_eq!(data.reg_url, "https://example.com/r");
        assert_eq!(draft.value(FormField::Schedule), "  09:00 報到\n");
    }

    #[test]
    fn test_optional_fields_start_absent() {
        let data = EventDraft::new().snapshot();
        assert_eq!(data.schedule, None);
        assert_eq!(data.extra_info, None);
    }

    #[test]
    fn test_select_template_keeps_other_fields() {
        let mut draft = EventDraft::new();
        draft.set(FormField::Topic, "Stroke".to_string());
        draft.select_template("creative");
        assert_eq!(draft.template(), "creative");
        assert_eq!(draft.value(FormField::Topic), "Stroke");
    }

    #[test]
    fn test_submit_passes_snapshot() {
        let mut draft = EventDraft::new();
        draft.set(FormField::Topic, "Sepsis Bundle".to_string());
        let mut seen = None;
        assert!(submit_draft(&draft, false, |data| seen = Some(data)));
        assert_eq!(seen.unwrap().topic, "Sepsis Bundle");
    }

    #[test]
    fn test_submit_blocked_while_loading() {
        let draft = EventDraft::new();
        let mut called = false;
        assert!(!submit_draft(&draft, true, |_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_field_catalog_is_consistent() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_name(field.name()), Some(field));
        }
        let laid_out: usize = FORM_ROWS.iter().map(|row| row.len()).sum();
        assert_eq!(laid_out, FormField::ALL.len());
        assert!(!FormField::Schedule.is_required());
        assert!(!FormField::ExtraInfo.is_required());
        assert!(FormField::RegUrl.is_required());
        assert_eq!(FormField::RegUrl.kind(), FieldKind::Url);
    }

    #[test]
    fn test_template_catalog() {
        let ids: Vec<_> = TEMPLATE_OPTIONS.iter().map(|t| t.id).collect();
        assert_eq!(ids, ["modern", "tech", "elegant", "creative"]);
        assert_eq!(TEMPLATE_OPTIONS[0].id, DEFAULT_TEMPLATE);
    }
}
