use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// The persistent main menu shown under most replies.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("Розклад на сьогодні", "m:today"),
            InlineKeyboardButton::callback("Розклад на завтра", "m:tomorrow"),
        ],
        vec![InlineKeyboardButton::callback("Розклад на тиждень", "m:week")],
        vec![InlineKeyboardButton::callback("Розклад по предмету", "m:subject")],
        vec![InlineKeyboardButton::callback("Найближчі пари", "m:next")],
        vec![
            InlineKeyboardButton::callback("Підключити сповіщення", "m:notify_on"),
            InlineKeyboardButton::callback("Відключити сповіщення", "m:notify_off"),
        ],
    ])
}

/// One page of the subject menu. Button payloads carry the page and the
/// subject's position within it; the catalog is recomputed on every press,
/// so no session state backs these indices.
pub fn subject_menu(page_subjects: &[String], page: usize, pages: usize) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = page_subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            vec![InlineKeyboardButton::callback(
                subject.clone(),
                format!("subj:{page}:{i}"),
            )]
        })
        .collect();

    let mut nav = Vec::new();
    if page > 0 {
        nav.push(InlineKeyboardButton::callback(
            "« Назад",
            format!("subj:{}:__page__", page - 1),
        ));
    }
    if page + 1 < pages {
        nav.push(InlineKeyboardButton::callback(
            "Далі »",
            format!("subj:{}:__page__", page + 1),
        ));
    }
    if !nav.is_empty() {
        rows.push(nav);
    }
    rows.push(vec![InlineKeyboardButton::callback("Меню", "m:menu")]);

    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_menu_nav_buttons() {
        let subjects: Vec<String> = (0..3).map(|i| format!("S{i}")).collect();

        // middle page gets both nav buttons
        let kb = subject_menu(&subjects, 1, 3);
        let nav_row = &kb.inline_keyboard[kb.inline_keyboard.len() - 2];
        assert_eq!(nav_row.len(), 2);

        // first page of one: no nav row, just subjects + menu
        let kb = subject_menu(&subjects, 0, 1);
        assert_eq!(kb.inline_keyboard.len(), subjects.len() + 1);
    }
}
