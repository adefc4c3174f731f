//! Fixed user-facing strings, looked up by key and language.
//!
//! Arabic is the primary language of the service; English is offered for
//! operators and logs that need it. Unknown keys fall back to a dash so a
//! missing translation never breaks a render.

use serde::{Deserialize, Serialize};

/// Display language for every fixed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// Placeholder for an empty headline, badge, hint or note list.
pub const EM_DASH: &str = "—";

/// Placeholder for an absent or unrecognised summary value.
pub const DASH: &str = "-";

// ── Keys ────────────────────────────────────────────────────

pub const PRIMARY_EMERGENCY_HEADLINE: &str = "primary.emergency.headline";
pub const PRIMARY_EMERGENCY_LABEL: &str = "primary.emergency.label";
pub const PRIMARY_CAUTION_FALLBACK: &str = "primary.caution.fallback";
pub const PRIMARY_CAUTION_LABEL: &str = "primary.caution.label";
pub const PRIMARY_ROUTINE_LABEL: &str = "primary.routine.label";

pub const HINT_EMERGENCY: &str = "hint.emergency";
pub const HINT_CAUTION: &str = "hint.caution";
pub const HINT_REASSURING: &str = "hint.reassuring";
pub const HINT_DEFAULT: &str = "hint.default";

pub const CALL_LABEL: &str = "call.label";

pub const SUMMARY_AGE: &str = "summary.age";
pub const SUMMARY_BREATHING: &str = "summary.breathing";
pub const SUMMARY_CONSCIOUS: &str = "summary.conscious";
pub const SUMMARY_BLEEDING: &str = "summary.bleeding";
pub const SUMMARY_NOTES: &str = "summary.notes";
pub const LIST_SEPARATOR: &str = "list.separator";

pub const VALUE_YES: &str = "value.yes";
pub const VALUE_NO: &str = "value.no";
pub const VALUE_ABNORMAL: &str = "value.abnormal";
pub const VALUE_BLEEDING_NONE: &str = "value.bleeding.none";
pub const VALUE_BLEEDING_MILD: &str = "value.bleeding.mild";
pub const VALUE_BLEEDING_SEVERE: &str = "value.bleeding.severe";

pub const SUBMIT_IDLE: &str = "control.submit.idle";
pub const SUBMIT_BUSY: &str = "control.submit.busy";
pub const ASSIST_ANALYZING: &str = "control.assist.analyzing";
pub const ASSIST_EVALUATING: &str = "control.assist.evaluating";

pub const NOTICE_EMPTY_TEXT: &str = "notice.empty_text";
pub const NOTICE_SUBMIT_FAILED: &str = "notice.submit_failed";
pub const NOTICE_ASSIST_FAILED: &str = "notice.assist_failed";

/// Look up a fixed string.
pub fn text(key: &str, lang: Language) -> &'static str {
    use Language::{Arabic, English};

    match (key, lang) {
        (PRIMARY_EMERGENCY_HEADLINE, Arabic) => "اتصل بالإسعاف الآن ولا تنتظر.",
        (PRIMARY_EMERGENCY_HEADLINE, English) => "Call an ambulance now. Do not wait.",
        (PRIMARY_EMERGENCY_LABEL, Arabic) => "اتصل الآن",
        (PRIMARY_EMERGENCY_LABEL, English) => "Call now",
        (PRIMARY_CAUTION_FALLBACK, Arabic) => "راقب الأعراض واطلب مساعدة إذا ساءت الحالة.",
        (PRIMARY_CAUTION_FALLBACK, English) => "Monitor the symptoms and get help if things get worse.",
        (PRIMARY_CAUTION_LABEL, Arabic) => "عرض الخطوات",
        (PRIMARY_CAUTION_LABEL, English) => "Show steps",
        (PRIMARY_ROUTINE_LABEL, Arabic) => "ابدأ الآن",
        (PRIMARY_ROUTINE_LABEL, English) => "Start now",

        (HINT_EMERGENCY, Arabic) => "تنبيه: التقييم يشير إلى حالة طارئة. الأفضل الاتصال فورًا.",
        (HINT_EMERGENCY, English) => "Warning: this looks like an emergency. Call right away.",
        (HINT_CAUTION, Arabic) => "الحالة متوسطة: اتبع أهم خطوة بالأسفل وراقب الأعراض.",
        (HINT_CAUTION, English) => "Moderate case: follow the key step below and watch the symptoms.",
        (HINT_REASSURING, Arabic) => "الحالة مطمئنة غالبًا: اتبع الإرشادات وقدّم رعاية أساسية.",
        (HINT_REASSURING, English) => "Likely reassuring: follow the guidance and give basic care.",
        (HINT_DEFAULT, Arabic) => "اتبع أهم خطوة بالأسفل.",
        (HINT_DEFAULT, English) => "Follow the key step below.",

        (CALL_LABEL, Arabic) => "اتصل على",
        (CALL_LABEL, English) => "Call",

        (SUMMARY_AGE, Arabic) => "العمر",
        (SUMMARY_AGE, English) => "Age",
        (SUMMARY_BREATHING, Arabic) => "التنفس",
        (SUMMARY_BREATHING, English) => "Breathing",
        (SUMMARY_CONSCIOUS, Arabic) => "الوعي",
        (SUMMARY_CONSCIOUS, English) => "Conscious",
        (SUMMARY_BLEEDING, Arabic) => "النزيف",
        (SUMMARY_BLEEDING, English) => "Bleeding",
        (SUMMARY_NOTES, Arabic) => "ملاحظات",
        (SUMMARY_NOTES, English) => "Notes",
        (LIST_SEPARATOR, Arabic) => "، ",
        (LIST_SEPARATOR, English) => ", ",

        (VALUE_YES, Arabic) => "نعم",
        (VALUE_YES, English) => "Yes",
        (VALUE_NO, Arabic) => "لا",
        (VALUE_NO, English) => "No",
        (VALUE_ABNORMAL, Arabic) => "غير طبيعي",
        (VALUE_ABNORMAL, English) => "Abnormal",
        (VALUE_BLEEDING_NONE, Arabic) => "لا يوجد",
        (VALUE_BLEEDING_NONE, English) => "None",
        (VALUE_BLEEDING_MILD, Arabic) => "بسيط",
        (VALUE_BLEEDING_MILD, English) => "Mild",
        (VALUE_BLEEDING_SEVERE, Arabic) => "شديد",
        (VALUE_BLEEDING_SEVERE, English) => "Severe",

        (SUBMIT_IDLE, Arabic) => "قيّم الحالة",
        (SUBMIT_IDLE, English) => "Assess",
        (SUBMIT_BUSY, Arabic) => "جاري التقييم...",
        (SUBMIT_BUSY, English) => "Assessing...",
        (ASSIST_ANALYZING, Arabic) => "جاري التحليل...",
        (ASSIST_ANALYZING, English) => "Analyzing...",
        (ASSIST_EVALUATING, Arabic) => "تم التحليل ✅ جاري التقييم...",
        (ASSIST_EVALUATING, English) => "Analyzed ✅ assessing...",

        (NOTICE_EMPTY_TEXT, Arabic) => "اكتب وصف الحالة أولًا",
        (NOTICE_EMPTY_TEXT, English) => "Describe the case first",
        (NOTICE_SUBMIT_FAILED, Arabic) => "صار خطأ في الاتصال بالسيرفر.\nتأكد أن خدمة التقييم تعمل.",
        (NOTICE_SUBMIT_FAILED, English) => "Could not reach the server.\nMake sure the triage service is running.",
        (NOTICE_ASSIST_FAILED, Arabic) => "صار خطأ في AI المحلي.",
        (NOTICE_ASSIST_FAILED, English) => "The local AI failed.",

        (_, _) => DASH,
    }
}
