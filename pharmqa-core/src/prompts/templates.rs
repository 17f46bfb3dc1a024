//! Fixed prompt wording per locale.

use crate::config::types::Locale;

pub(super) struct Templates {
    /// Classification instruction is `intro(labels)rules`.
    pub classify_intro: &'static str,
    pub classify_rules: &'static str,
    pub question_prefix: &'static str,
    pub subject_prefix: &'static str,
    pub answer_body: &'static str,
    pub re_explain_suffix: &'static str,
    pub more_examples_suffix: &'static str,
    pub label_separator: &'static str,
}

const ENGLISH: Templates = Templates {
    classify_intro: "Which pharmacy subject ",
    classify_rules: " does the question below fit best? Answer with exactly one word: the subject name only.",
    question_prefix: "Question: ",
    subject_prefix: "Subject: ",
    answer_body: "[Textbook-style explanation]
- Explain in this order: definition → mechanism → clinical relevance → example.

[Multiple-choice quiz (3-5 options)]
- Give one 3-5 option multiple-choice question about the topic, and when the student picks an option, give immediate feedback (correct answer and explanation).

[Exam summary]
- Provide the key points as an exam-prep summary in slide format.",
    re_explain_suffix: "\nPlease explain it again, more simply!",
    more_examples_suffix: "\nShow me more examples.",
    label_separator: ", ",
};

const KOREAN: Templates = Templates {
    classify_intro: "아래 질문이 어떤 약학 과목",
    classify_rules: "에 가장 적합한지 한 단어로만 답해줘.",
    question_prefix: "질문: ",
    subject_prefix: "과목: ",
    answer_body: "[교과서 스타일 설명]
- 정의 → 기전 → 임상 → 예시 순서로 설명해줘.

[3~5지선다형 퀴즈]
- 질문 내용과 관련된 3~5지선다형 퀴즈 1개를 내고, 사용자가 선택하면 즉시 피드백(정답/해설)을 제공해줘.

[시험 대비 요약]
- 시험 대비용 슬라이드 형식으로 핵심 요약을 제공해줘.",
    re_explain_suffix: "\n다시 설명해줘. 더 쉽게!",
    more_examples_suffix: "\n예시를 더 많이 보여줘.",
    label_separator: ", ",
};

pub(super) fn for_locale(locale: Locale) -> &'static Templates {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Korean => &KOREAN,
    }
}
