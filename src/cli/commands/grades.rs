//! Interactive grade book session

use super::Console;
use askama::Template;
use logger::error;
use school_records::core::errors::GradeError;
use school_records::core::grades::GradeBook;
use school_records::core::models::GRADE_SUBJECTS;
use school_records::core::report::GradeReport;
use std::io::{self, BufRead, Write};

const MENU: &str = "
=== GRADE MANAGEMENT SYSTEM ===
1. Add Student
2. Set All Grades for Student
3. Update Single Subject Grade
4. View Student Grade Report
5. View All Students' Grades
6. View Subject Averages
7. Show Student Count
8. Exit";

/// Run the grade menu on stdin/stdout
pub fn run(demo: bool) {
    let mut book = if demo {
        GradeBook::with_demo_students()
    } else {
        GradeBook::new()
    };

    if let Err(e) = session(&mut Console::stdio(), &mut book) {
        error!("Grade session aborted: {e}");
    }
}

/// Run the menu loop until the user exits or input ends
pub fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut GradeBook,
) -> io::Result<()> {
    loop {
        console.say(MENU)?;
        let Some(choice) = console.prompt("Enter your choice (1-8): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(name) = console.prompt("Enter student name: ")? else {
                    break;
                };
                let Some(id) = ask_student_id(console)? else {
                    break;
                };
                let Some(id) = id else { continue };
                match book.add_student(name, id) {
                    Ok(()) => console.say("Student added successfully for grade management!")?,
                    Err(e) => console.say(format!("Error: {e}"))?,
                }
            }
            "2" => {
                let Some(id) = ask_student_id(console)? else {
                    break;
                };
                let Some(id) = id else { continue };
                if !set_all_grades(console, book, id)? {
                    break;
                }
            }
            "3" => {
                let Some(id) = ask_student_id(console)? else {
                    break;
                };
                let Some(subject) = console.prompt("Enter subject: ")? else {
                    break;
                };
                let Some(grade) = console.prompt_parsed::<f64>("Enter new grade: ")? else {
                    break;
                };
                let (Some(id), Ok(grade)) = (id, grade) else {
                    console.say("Failed to update grade! Invalid subject or grade value.")?;
                    continue;
                };
                match book.update_grade(id, &subject, grade) {
                    Ok(()) => console.say(format!("Grade for {subject} updated to: {grade}"))?,
                    Err(e @ GradeError::StudentNotFound { .. }) => console.say(e)?,
                    Err(_) => {
                        console.say("Failed to update grade! Invalid subject or grade value.")?;
                    }
                }
            }
            "4" => {
                let Some(id) = ask_student_id(console)? else {
                    break;
                };
                let Some(id) = id else { continue };
                match book.record(id) {
                    Ok(record) => match GradeReport::new(record).render() {
                        Ok(text) => console.say(format!("\n{}", text.trim_end()))?,
                        Err(e) => console.say(format!("Error: {e}"))?,
                    },
                    Err(e) => console.say(e)?,
                }
            }
            "5" => show_all_grades(console, book)?,
            "6" => show_subject_averages(console, book)?,
            "7" => console.say(format!("Total students: {}", book.len()))?,
            "8" => break,
            _ => console.say("Invalid choice! Please try again.")?,
        }
    }

    console.say("Exiting Grade Management System. Goodbye!")
}

/// `None` at end of input; `Some(None)` after rejecting a non-numeric id
fn ask_student_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Option<u32>>> {
    match console.prompt_parsed::<u32>("Enter student ID: ")? {
        None => Ok(None),
        Some(Ok(id)) => Ok(Some(Some(id))),
        Some(Err(_)) => {
            console.say("Error: Please enter a valid numeric ID.")?;
            Ok(Some(None))
        }
    }
}

/// Prompt for every subject in turn; returns `false` if input ended
fn set_all_grades<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut GradeBook,
    id: u32,
) -> io::Result<bool> {
    let name = match book.record(id) {
        Ok(record) => record.name.clone(),
        Err(e) => {
            console.say(e)?;
            return Ok(true);
        }
    };

    console.say(format!("\nEntering grades for: {name}"))?;
    console.say("Enter grades (0-100) for all subjects:")?;
    for subject in GRADE_SUBJECTS {
        let Some(reply) = console.prompt_parsed::<f64>(&format!("{subject}: "))? else {
            return Ok(false);
        };
        match reply.map(|grade| (grade, book.update_grade(id, subject, grade))) {
            Ok((grade, Ok(()))) => console.say(format!("  ✓ Grade set: {grade}"))?,
            _ => console.say("  ✗ Invalid grade! Using previous value.")?,
        }
    }
    console.say("All grades updated successfully!")?;
    Ok(true)
}

fn show_all_grades<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &GradeBook,
) -> io::Result<()> {
    if book.is_empty() {
        return console.say("\nNo students in the system!");
    }

    console.say("\n=== ALL STUDENTS GRADES ===")?;
    for record in book.records() {
        console.say(format!("\nStudent: {} (ID: {})", record.name, record.id))?;
        let grades = record
            .grades()
            .map(|(subject, grade)| format!("{subject}: {grade}"))
            .collect::<Vec<_>>()
            .join(" ");
        console.say(format!("Subjects: {grades}"))?;
        console.say(format!("Average: {:.1}", record.average()))?;
    }
    Ok(())
}

fn show_subject_averages<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &GradeBook,
) -> io::Result<()> {
    if book.is_empty() {
        return console.say("\nNo students in the system!");
    }

    console.say("\n=== SUBJECT AVERAGES ===")?;
    console.say(format!(
        "{:<15}{:<10}{:<10}{:<10}",
        "SUBJECT", "AVERAGE", "HIGHEST", "LOWEST"
    ))?;
    console.say("-".repeat(52))?;
    for stats in book.subject_averages() {
        console.say(format!(
            "{:<15}{:<10.1}{:<10.1}{:<10.1}",
            stats.subject, stats.average, stats.highest, stats.lowest
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{output, scripted};

    fn run_script(book: &mut GradeBook, script: &str) -> String {
        let mut console = scripted(script);
        session(&mut console, book).unwrap();
        output(console)
    }

    #[test]
    fn test_add_and_report() {
        let mut book = GradeBook::new();
        let out = run_script(&mut book, "1\nAmina Otieno\n2001\n1\nDup\n2001\n3\n2001\nMaths\n88\n4\n2001\n8\n");

        assert!(out.contains("Student added successfully for grade management!"));
        assert!(out.contains("Error: Student ID already exists!"));
        assert!(out.contains("Grade for Maths updated to: 88"));
        assert!(out.contains("=== GRADE REPORT ===\nName: Amina Otieno\nID: 2001"));
        assert!(out.contains("Maths          88.0      A\n"));
        assert!(out.contains("AVERAGE        8.8       E"));
        assert!(out.contains("Exiting Grade Management System. Goodbye!"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_set_all_grades_keeps_previous_on_bad_input() {
        let mut book = GradeBook::with_demo_students();
        let script = "2\n1001\n70\n120\nabc\n50\n50\n50\n50\n50\n50\n50\n8\n";
        let out = run_script(&mut book, script);

        assert!(out.contains("Entering grades for: John Doe"));
        assert_eq!(out.matches("  ✗ Invalid grade! Using previous value.").count(), 2);
        assert_eq!(out.matches("  ✓ Grade set: ").count(), 8);
        let record = book.record(1001).unwrap();
        assert_eq!(record.grade("Maths"), Some(70.0));
        assert_eq!(record.grade("English"), Some(0.0));
        assert_eq!(record.grade("Kiswahili"), Some(0.0));
        assert_eq!(record.grade("Business"), Some(50.0));
    }

    #[test]
    fn test_update_failures() {
        let mut book = GradeBook::with_demo_students();
        let out = run_script(&mut book, "3\n9999\nMaths\n50\n3\n1002\nArt\n50\n3\n1002\nBio\n-1\n8\n");

        assert!(out.contains("Student not found!"));
        assert_eq!(
            out.matches("Failed to update grade! Invalid subject or grade value.").count(),
            2
        );
    }

    #[test]
    fn test_listings() {
        let mut book = GradeBook::new();
        let out = run_script(&mut book, "5\n6\n7\n");
        assert_eq!(out.matches("No students in the system!").count(), 2);
        assert!(out.contains("Total students: 0"));

        let mut book = GradeBook::with_demo_students();
        book.update_grade(1001, "Maths", 90.0).unwrap();
        book.update_grade(1002, "Maths", 60.0).unwrap();
        let out = run_script(&mut book, "5\n6\n8\n");
        assert!(out.contains("Student: Mike Johnson (ID: 1003)"));
        assert!(out.contains("Average: 9.0"));
        assert!(out.contains("SUBJECT        AVERAGE   HIGHEST   LOWEST    "));
        assert!(out.contains("Maths          50.0      90.0      0.0       "));
    }
}
