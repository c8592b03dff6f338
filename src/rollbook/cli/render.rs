//! # Rendering
//!
//! Terminal output for `CmdResult`s. Layout math (column widths) is done with
//! `unicode-width` because names and class labels are often CJK, where one char
//! takes two terminal columns.

use chrono::{DateTime, Utc};
use colored::Colorize;
use rollbook::api::{CmdMessage, MessageLevel, StoreSummary};
use rollbook::config::RollbookConfig;
use rollbook::model::Student;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_students(students: &[Student]) {
    if students.is_empty() {
        return;
    }
    let now = Utc::now();
    for line in render_student_lines(students, now) {
        println!("{}", line);
    }
}

/// Plain (uncolored) table lines: id, name, grade, class, age of the record.
pub(super) fn render_student_lines(students: &[Student], now: DateTime<Utc>) -> Vec<String> {
    let id_width = column_width(students.iter().map(|s| s.id.as_str()));
    let name_width = column_width(students.iter().map(|s| s.name.as_str()));
    let grade_width = column_width(students.iter().map(|s| s.grade.as_str()));
    let class_width = column_width(students.iter().map(|s| s.class_name.as_str()));

    students
        .iter()
        .map(|s| {
            format!(
                "{}{}{}{}{}",
                pad(&s.id, id_width),
                pad(&s.name, name_width),
                pad(&s.grade, grade_width),
                pad(&s.class_name, class_width),
                format_time_ago(s.created_at, now)
            )
        })
        .collect()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0) + COLUMN_GAP
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}

fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

pub(super) fn print_summary(summary: &StoreSummary) {
    let state = if summary.exists {
        "present".green()
    } else {
        "missing".red()
    };
    println!("{} {} ({})", "Data file:".bold(), summary.data_path.display(), state);
    println!("{} {} {}", "App:".bold(), summary.app_name, summary.version.dimmed());
    println!("{} {}", "Students:".bold(), summary.students);
    println!("{} {}", "Attendance records:".bold(), summary.attendance);
    println!("{} {}", "Grade records:".bold(), summary.grades);
}

pub(super) fn print_config(config: &RollbookConfig) {
    println!("data_file = {}", config.data_file);
    println!(
        "default_class = {}",
        config.default_class.as_deref().unwrap_or("(unset)")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn student(id: &str, name: &str, created_at: DateTime<Utc>) -> Student {
        Student::new(
            id.to_string(),
            name.to_string(),
            "1班".to_string(),
            "2024级".to_string(),
            created_at,
        )
    }

    #[test]
    fn test_columns_align_with_wide_chars() {
        let now = Utc::now();
        let students = vec![
            student("20240101", "张三", now),
            student("20240102", "Bob", now),
        ];
        let lines = render_student_lines(&students, now);

        // "张三" is 4 columns wide, so both grade columns start at the same offset
        let grade_col = |line: &str| line[..line.find("2024级").unwrap()].width();
        assert_eq!(grade_col(&lines[0]), grade_col(&lines[1]));
    }

    #[test]
    fn test_time_ago_column() {
        let now = Utc::now();
        let lines = render_student_lines(&[student("1", "A", now - Duration::days(3))], now);
        assert!(lines[0].ends_with("3 days ago"));
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abcdef", 3), "abcdef");
        assert_eq!(pad("ab", 4), "ab  ");
    }
}
