// 🖨️ Headless output for the `summary` and `list` subcommands

use anyhow::Result;
use serde::Serialize;

use crate::badge::Badged;
use crate::cli::EntityKind;
use crate::page::Campus;
use crate::stats::{self, StatCard};

/// All stat cards, one page per block
pub fn summary(campus: &Campus) -> String {
    let overview = campus.overview();
    let mut out = String::from("UniManage - Admin Portal\n");
    out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    out.push_str(&format!(
        "{} students | {} faculty members | {} active courses | {} seats filled\n",
        overview.total_students,
        overview.faculty_members,
        overview.active_courses,
        stats::format_percentage(overview.capacity_rate),
    ));

    write_cards(&mut out, "Students", &campus.student_cards());
    write_cards(&mut out, "Faculty", &campus.faculty_cards());
    write_cards(&mut out, "Courses", &campus.course_cards());
    out
}

fn write_cards(out: &mut String, title: &str, cards: &[StatCard]) {
    out.push_str(&format!("\n{}\n", title));
    for card in cards {
        out.push_str(&format!("  {:<16} {:>8}\n", card.label, card.value));
    }
}

/// Filtered records of one page as a table or JSON
pub fn list(campus: &Campus, kind: EntityKind, query: &str, json: bool) -> Result<String> {
    match kind {
        EntityKind::Students => {
            let rows = crate::search::filter(campus.students.store().records(), query);
            if json {
                return to_json(&rows);
            }
            Ok(table(
                &["ID", "Name", "Email", "Program", "Year", "GPA", "Status"],
                rows.iter()
                    .map(|s| {
                        vec![
                            s.id.clone(),
                            s.name.clone(),
                            s.email.clone(),
                            s.program.clone(),
                            s.year.to_string(),
                            s.gpa.clone(),
                            s.status.badge().label.to_string(),
                        ]
                    })
                    .collect(),
            ))
        }
        EntityKind::Faculty => {
            let rows = crate::search::filter(campus.faculty.store().records(), query);
            if json {
                return to_json(&rows);
            }
            Ok(table(
                &["ID", "Name", "Department", "Position", "Experience", "Status"],
                rows.iter()
                    .map(|f| {
                        vec![
                            f.id.clone(),
                            f.name.clone(),
                            f.department.clone(),
                            f.position.badge().label.to_string(),
                            f.experience.clone(),
                            f.status.badge().label.to_string(),
                        ]
                    })
                    .collect(),
            ))
        }
        EntityKind::Courses => {
            let rows = crate::search::filter(campus.courses.store().records(), query);
            if json {
                return to_json(&rows);
            }
            Ok(table(
                &["ID", "Title", "Instructor", "Credits", "Enrollment", "Status"],
                rows.iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.title.clone(),
                            c.instructor.clone(),
                            c.credits.to_string(),
                            format!(
                                "{}/{} ({})",
                                c.enrolled,
                                c.capacity,
                                stats::format_percentage(c.enrollment_percentage())
                            ),
                            c.status.badge().label.to_string(),
                        ]
                    })
                    .collect(),
            ))
        }
    }
}

fn to_json<T: Serialize>(rows: &[&T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Left aligned columns sized to their widest cell
fn table(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(&mut out, &header_cells, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out.push_str(&format!("{} record(s)\n", rows.len()));
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
