//! Interactive enrollment session backed by the data file

use super::Console;
use logger::{error, verbose};
use school_records::core::enrollment::{self, Decoded, EnrollmentStore};
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "
=== Student Enrollment System ===
1. Add Student
2. Add Course
3. Enroll Student in Course
4. Display All Students
5. Display All Courses
6. Save and Exit
================================";

/// Run the enrollment menu on stdin/stdout against `data_file`
pub fn run(data_file: &Path) {
    verbose!("Enrollment data file: {}", data_file.display());
    if let Err(e) = run_with(&mut Console::stdio(), data_file) {
        error!("Enrollment session aborted: {e}");
    }
}

/// Load `data_file`, run the menu, and save on the way out
///
/// The store is saved whether the session ends through the menu or at end of
/// input, but only when the session changed it. A file that exists but cannot
/// be read is never touched and no session is started.
pub fn run_with<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data_file: &Path,
) -> io::Result<()> {
    let mut store = match enrollment::load(data_file) {
        Ok(Some(decoded)) => {
            console.say(loaded_message(&decoded, data_file))?;
            decoded.store
        }
        Ok(None) => {
            console.say("No previous data found. Starting fresh.")?;
            EnrollmentStore::new()
        }
        Err(e) => {
            error!("{e}");
            console.say(format!("Error: {e}."))?;
            return console.say("Data file left untouched. Fix or move it and try again.");
        }
    };
    let initial = store.clone();

    let outcome = session(console, &mut store);

    if store == initial {
        console.say("No changes to save.")?;
    } else {
        match enrollment::save(&store, data_file) {
            Ok(()) => console.say(format!("Data saved to {}", data_file.display()))?,
            Err(e) => {
                error!("{e}");
                console.say("Error: Could not save data!")?;
            }
        }
    }
    outcome?;
    console.say("Goodbye!")
}

fn loaded_message(decoded: &Decoded, data_file: &Path) -> String {
    let mut message = format!("Data loaded successfully from {}", data_file.display());
    if decoded.skipped_lines > 0 {
        message.push_str(&format!(
            "\nWarning: {} unreadable line(s) skipped; they will be dropped on save.",
            decoded.skipped_lines
        ));
    }
    if decoded.lossy {
        message.push_str("\nWarning: invalid UTF-8 in the file was replaced with '\u{FFFD}'.");
    }
    message
}

/// Run the menu loop until the user exits or input ends
pub fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut EnrollmentStore,
) -> io::Result<()> {
    loop {
        console.say(MENU)?;
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some((id, name)) = ask_pair(console, "Enter Student ID: ", "Enter Student Name: ")?
                else {
                    return Ok(());
                };
                match store.add_student(&id, &name) {
                    Ok(()) => console.say("Student added successfully.")?,
                    Err(e) => console.say(e)?,
                }
            }
            "2" => {
                let Some((id, name)) = ask_pair(console, "Enter Course ID: ", "Enter Course Name: ")?
                else {
                    return Ok(());
                };
                match store.add_course(&id, &name) {
                    Ok(()) => console.say("Course added successfully.")?,
                    Err(e) => console.say(e)?,
                }
            }
            "3" => {
                let Some((student, course)) =
                    ask_pair(console, "Enter Student ID: ", "Enter Course ID: ")?
                else {
                    return Ok(());
                };
                match store.enroll(&student, &course) {
                    Ok(()) => console.say(format!(
                        "Student enrolled successfully in course {course}."
                    ))?,
                    Err(e) => console.say(e)?,
                }
            }
            "4" => show_students(console, store)?,
            "5" => show_courses(console, store)?,
            "6" => return Ok(()),
            _ => console.say("Invalid choice. Try again.")?,
        }
    }
}

fn ask_pair<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    first: &str,
    second: &str,
) -> io::Result<Option<(String, String)>> {
    let Some(a) = console.prompt(first)? else {
        return Ok(None);
    };
    let Some(b) = console.prompt(second)? else {
        return Ok(None);
    };
    Ok(Some((a, b)))
}

fn show_students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &EnrollmentStore,
) -> io::Result<()> {
    if store.students().is_empty() {
        return console.say("No students registered.");
    }

    console.say("\n--- List of Students ---")?;
    for student in store.students() {
        console.say(format!("ID: {}, Name: {}", student.id, student.name))?;
        let courses = if student.courses.is_empty() {
            "None".to_string()
        } else {
            student
                .courses
                .iter()
                .map(|id| format!("{id} ({})", store.course_name(id)))
                .collect::<Vec<_>>()
                .join(", ")
        };
        console.say(format!("  Enrolled Courses: {courses}"))?;
    }
    Ok(())
}

fn show_courses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &EnrollmentStore,
) -> io::Result<()> {
    if store.courses().is_empty() {
        return console.say("No courses available.");
    }

    console.say("\n--- List of Courses ---")?;
    for course in store.courses() {
        console.say(format!("ID: {}, Name: {}", course.id, course.name))?;
    }
    Ok(())
}
