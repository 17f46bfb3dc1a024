//! User-facing strings per language.

use pharmqa_core::{Locale, Stage};

pub struct UiText {
    pub title: &'static str,
    pub caption: &'static str,
    pub guide: &'static [&'static str],
    pub classifying: &'static str,
    pub answering: &'static str,
    pub answer_header: &'static str,
    pub subject_prompt: &'static str,
    pub subject_selected: &'static str,
    pub question_cleared: &'static str,
    pub follow_up_added: &'static str,
    pub needs_answer: &'static str,
    pub nothing_pending: &'static str,
    pub no_history: &'static str,
    pub pending_header: &'static str,
    pub goodbye: &'static str,
}

const ENGLISH: UiText = UiText {
    title: "Pharmacy Student Q&A 💊",
    caption: "Pharmacy Q&A and quiz tutor powered by",
    guide: &[
        "Pick a subject with /subject <name>, or leave it on auto-classify, then type your question (at least 5 characters).",
        "End a line with \\ to continue the question on the next line.",
        "Every answer includes a textbook-style explanation, a quiz and an exam summary.",
        "Use /again (explain more simply) or /examples (more examples), then press Enter to resubmit.",
        "Other commands: /reset /history /question /help /quit",
    ],
    classifying: "Classifying the question by subject...",
    answering: "Generating the answer...",
    answer_header: "Answer:",
    subject_prompt: "Subjects (select with /subject <name>):",
    subject_selected: "Subject set to",
    question_cleared: "Question cleared.",
    follow_up_added: "Follow-up added. Press Enter to submit:",
    needs_answer: "Ask a question first; follow-ups extend the last answer.",
    nothing_pending: "No pending question. Type a question first.",
    no_history: "No conversation yet.",
    pending_header: "Pending question:",
    goodbye: "Goodbye!",
};

const KOREAN: UiText = UiText {
    title: "약대생 Q&A 챗봇 💊",
    caption: "약학 전공 Q&A 및 퀴즈 챗봇, 모델:",
    guide: &[
        "/subject <과목>으로 과목을 선택하거나 '자동 분류'로 질문을 입력하세요 (최소 5자).",
        "줄 끝에 \\를 입력하면 다음 줄에서 질문을 이어 쓸 수 있습니다.",
        "답변에는 교과서 스타일 설명, 퀴즈, 시험 대비 요약이 포함됩니다.",
        "/again(다시 설명해줘), /examples(예시 더 보기)로 질문을 확장한 뒤 Enter로 다시 제출하세요.",
        "기타 명령: /reset /history /question /help /quit",
    ],
    classifying: "질문을 분석하여 과목을 분류 중입니다...",
    answering: "Gemini가 답변을 생성 중입니다...",
    answer_header: "답변:",
    subject_prompt: "과목 목록 (/subject <이름>으로 선택):",
    subject_selected: "선택한 과목:",
    question_cleared: "입력을 초기화했습니다.",
    follow_up_added: "질문을 확장했습니다. Enter를 눌러 제출하세요:",
    needs_answer: "먼저 질문을 제출하세요. 대화 확장은 마지막 답변이 있을 때만 가능합니다.",
    nothing_pending: "제출할 질문이 없습니다. 질문을 입력하세요.",
    no_history: "이전 대화가 없습니다.",
    pending_header: "현재 질문:",
    goodbye: "안녕히 가세요!",
};

pub fn for_locale(locale: Locale) -> &'static UiText {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Korean => &KOREAN,
    }
}

impl UiText {
    pub fn stage(&self, stage: Stage) -> &'static str {
        match stage {
            Stage::Classifying => self.classifying,
            Stage::Answering => self.answering,
        }
    }
}
