use super::render::print_subjects;
use super::texts;
use pharmqa_core::Locale;

pub fn handle_subjects_command(locale: Locale) {
    println!("{}", texts::for_locale(locale).subject_prompt);
    print_subjects(locale);
}
